//! Button component for TUI

use crate::state::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a filled primary button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_focused: bool,
    is_enabled: bool,
    palette: &Palette,
) {
    let border_style = if is_focused {
        Style::default().fg(palette.active_outline)
    } else {
        Style::default().fg(palette.input_outline)
    };

    let text_style = if !is_enabled {
        Style::default()
            .fg(palette.placeholder)
            .bg(palette.button_background)
    } else if is_focused {
        Style::default()
            .fg(palette.background)
            .bg(palette.button_background)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(palette.background)
            .bg(palette.button_background)
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .alignment(Alignment::Center)
        .style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a one-line text link, underlined when focused
pub fn render_link(frame: &mut Frame, area: Rect, content: &str, is_focused: bool, palette: &Palette) {
    let mut style = Style::default().fg(palette.secondary);
    if is_focused {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    let text = if is_focused {
        format!("▸ {content}")
    } else {
        content.to_string()
    };
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).style(style),
        area,
    );
}
