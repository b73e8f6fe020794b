use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Alert, TitleBar, output_list};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Top-level frame layout: title bar, output area, input box — with the
/// alert modal drawn over everything when raised.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, main_area, input_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(app.endpoint.clone(), app.status_message.clone());
    title_bar.render(frame, title_area);

    output_list::render_output(frame, main_area, &app.output, &mut tui.output_list);

    tui.input_box.render(frame, input_area);

    // The alert is blocking, so it paints last, centered over the frame.
    if let Some(message) = &app.alert {
        let mut alert = Alert::new(message.clone());
        alert.render(frame, frame.area());
    }
}
