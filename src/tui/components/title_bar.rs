//! # TitleBar Component
//!
//! Top status bar showing the agent endpoint and the current status
//! message. Purely presentational — all fields are props from App state.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    /// Agent service base URL
    pub endpoint: String,
    /// Transient status (e.g. "Running \"backup_db\"…")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(endpoint: String, status_message: String) -> Self {
        Self {
            endpoint,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Taskdeck (agent: {})", self.endpoint)
        } else {
            format!("Taskdeck (agent: {}) | {}", self.endpoint, self.status_message)
        };
        frame.render_widget(Span::raw(title_text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_with_status() {
        let mut bar = TitleBar::new(
            "http://127.0.0.1:8000".to_string(),
            "Running \"backup_db\"…".to_string(),
        );
        let text = render_to_text(&mut bar);
        assert!(text.contains("Taskdeck (agent: http://127.0.0.1:8000)"));
        assert!(text.contains("Running"));
    }

    #[test]
    fn test_title_without_status() {
        let mut bar = TitleBar::new("http://127.0.0.1:8000".to_string(), String::new());
        let text = render_to_text(&mut bar);
        assert!(text.contains("Taskdeck (agent: http://127.0.0.1:8000)"));
        assert!(!text.contains('|'));
    }
}
