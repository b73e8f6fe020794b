//! # Alert Component
//!
//! Blocking notification modal, the terminal equivalent of the browser's
//! `alert()`. While raised it is drawn centered over everything else, and
//! the event loop routes all input here until the user dismisses it —
//! nothing leaks through to the input box or the output list underneath.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum AlertEvent {
    Dismiss,
}

/// Modal alert with a message prop. Constructed per-frame from
/// `app.alert`; holds no state of its own.
pub struct Alert {
    pub message: String,
}

impl Alert {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Whether this event closes the alert. Kept as an associated fn so the
    /// event loop can check dismissal without constructing the component.
    pub fn dismisses(event: &TuiEvent) -> bool {
        matches!(event, TuiEvent::Submit | TuiEvent::Quit)
    }
}

/// Centered popup area: 60% of the width, tall enough for the message.
fn popup_area(area: Rect, message_lines: u16) -> Rect {
    let horizontal = Layout::horizontal([Constraint::Percentage(60)]).flex(Flex::Center);
    let vertical =
        Layout::vertical([Constraint::Length(message_lines + 4)]).flex(Flex::Center);
    let [area] = horizontal.areas(area);
    let [area] = vertical.areas(area);
    area
}

impl Component for Alert {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let probe = Paragraph::new(self.message.as_str()).wrap(Wrap { trim: false });
        let inner_width = (area.width * 60 / 100).saturating_sub(2).max(1);
        let message_lines = probe.line_count(inner_width) as u16;

        let popup = popup_area(area, message_lines);

        let body = Paragraph::new(vec![
            Line::raw(self.message.as_str()),
            Line::raw(""),
            Line::styled("Press Enter to dismiss", Style::default().fg(Color::DarkGray)),
        ])
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title("Alert")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: false });

        frame.render_widget(Clear, popup);
        frame.render_widget(body, popup);
    }
}

impl EventHandler for Alert {
    type Event = AlertEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        // Everything except dismissal is swallowed while the alert is up.
        Self::dismisses(event).then_some(AlertEvent::Dismiss)
    }
}
