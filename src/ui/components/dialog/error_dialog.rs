//! Alert dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::Palette;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the alert at the head of the error queue
pub fn render_error_dialog(frame: &mut Frame, message: &str, palette: &Palette) {
    let key = Style::default()
        .fg(palette.secondary)
        .add_modifier(Modifier::BOLD);
    let hint = Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" or "),
        Span::styled("Esc", key),
        Span::raw(" to dismiss"),
    ]);

    render_dialog(
        frame,
        DialogConfig {
            title: "Alert",
            accent: palette.error,
            message,
            hint: Some(hint),
            max_width: 60,
        },
        palette,
    );
}
