//! UI module for rendering the TUI

mod components;
mod dashboard;
mod forms;
mod layout;
mod splash;

use crate::app::App;
use crate::state::Screen;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = app.state.theme.palette();

    if let Some(splash_state) = &app.splash_state {
        splash::draw(frame, area, splash_state, palette);
        return;
    }

    let (main_area, status_area) = layout::create_layout(area);

    match app.state.current_screen() {
        Screen::Login | Screen::Register | Screen::Recover => {
            if let Some(form) = app.state.current_form() {
                forms::draw_auth_form(frame, main_area, form, app.state.theme);
            }
        }
        Screen::Dashboard => dashboard::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Alerts are modal and drawn last
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message, palette);
    }
}
