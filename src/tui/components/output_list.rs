//! # OutputList Component
//!
//! Scrollable view of the agent's output entries.
//!
//! Each entry is an opaque JSON value and is rendered literally (compact
//! JSON, like the original's `JSON.stringify`), one bordered block per
//! entry. The whole list is replaced when a run succeeds, so there is no
//! append path — the component just draws whatever the App currently holds.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollbarVisibility};

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Scroll state for the output view. Persistent across frames so the
/// scroll position survives redraws.
pub struct OutputListState {
    pub scroll_state: tui_scrollview::ScrollViewState,
}

impl OutputListState {
    pub fn new() -> Self {
        Self {
            scroll_state: tui_scrollview::ScrollViewState::default(),
        }
    }
}

impl Default for OutputListState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for OutputListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        Some(())
    }
}

struct RenderedEntry<'a> {
    paragraph: Paragraph<'a>,
    height: u16,
}

impl RenderedEntry<'_> {
    fn new(index: usize, entry: &serde_json::Value, width: u16) -> Self {
        // Literal rendering of the opaque entry, compact form.
        let text = entry.to_string();
        let paragraph = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(format!("[{}]", index))
                    .border_style(Style::default().fg(Color::Green).add_modifier(Modifier::DIM)),
            )
            .style(Style::default().fg(Color::Green))
            .wrap(Wrap { trim: false });

        let inner_width = width.saturating_sub(2);
        let height = paragraph.line_count(inner_width) as u16;

        RenderedEntry { paragraph, height }
    }
}

/// Draw the output entries into `area`, scrolling via `state`.
pub fn render_output(
    frame: &mut Frame,
    area: Rect,
    entries: &[serde_json::Value],
    state: &mut OutputListState,
) {
    if entries.is_empty() {
        let placeholder = Paragraph::new("No output yet. Enter a task name and press Enter.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::bordered().title("Task Output"));
        frame.render_widget(placeholder, area);
        return;
    }

    // Leave a column for the scrollbar.
    let content_width = area.width.saturating_sub(1);

    let rendered: Vec<RenderedEntry> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| RenderedEntry::new(index, entry, content_width))
        .collect();

    let total_height: u16 = rendered.iter().map(|e| e.height).sum();

    let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

    let mut y_offset: u16 = 0;
    for entry in &rendered {
        let entry_rect = Rect::new(0, y_offset, content_width, entry.height);
        scroll_view.render_widget(entry.paragraph.clone(), entry_rect);
        y_offset += entry.height;
    }

    frame.render_stateful_widget(scroll_view, area, &mut state.scroll_state);
}
