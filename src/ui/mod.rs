//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod receipt;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (sidebar_area, main_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.current_view {
        View::Form => forms::draw_registration_form(frame, main_area, app),
        View::Receipt => receipt::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Error dialog on top of everything
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error, app.state.queued_errors());
    }
}
