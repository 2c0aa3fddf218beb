//! Field rendering utilities for forms

use crate::state::{FormField, Palette};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus its error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form field with its inline validation error underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    error: Option<&str>,
    is_active: bool,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_color = if error.is_some() {
        palette.error
    } else if is_active {
        palette.active_outline
    } else {
        palette.input_outline
    };

    let mut title = vec![Span::styled(
        format!(" {} ", field.label()),
        Style::default().fg(palette.text),
    )];
    if field.spec.is_required() {
        title.push(Span::styled("* ", Style::default().fg(palette.error)));
    }

    let value = field.display_value();
    let mut spans = if value.is_empty() {
        vec![Span::styled(
            field.spec.placeholder.as_str(),
            Style::default()
                .fg(palette.placeholder)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        vec![Span::styled(value, Style::default().fg(palette.text))]
    };
    if is_active {
        // Cursor goes before the placeholder so it reads as an empty input
        let cursor = Span::styled("▌", Style::default().fg(palette.active_outline));
        if field.as_text().is_empty() {
            spans.insert(0, cursor);
        } else {
            spans.push(cursor);
        }
    }

    let mut block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    if field.spec.secure {
        let hint = if field.revealed { " ^R hide " } else { " ^R show " };
        block = block.title_bottom(
            Line::from(Span::styled(hint, Style::default().fg(palette.placeholder)))
                .right_aligned(),
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .block(block)
            .style(Style::default().bg(palette.card)),
        chunks[0],
    );

    if let Some(message) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {message}"),
                Style::default().fg(palette.error),
            )),
            chunks[1],
        );
    }
}
