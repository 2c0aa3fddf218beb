//! Authentication form rendering (login, register, recover)

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::state::{FlowKind, Focus, FormAction, FormScreen, Palette, Theme};
use crate::ui::components::{render_button, render_link, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const CARD_WIDTH: u16 = 60;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Draw a form screen as a centered card
pub fn draw_auth_form(frame: &mut Frame, area: Rect, form: &FormScreen, theme: Theme) {
    let palette = theme.palette();
    let flow = form.flow();
    let controller = &form.controller;
    let fields = controller.fields();
    let actions = form.actions();
    let focus = form.focus();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let heights: Vec<u16> = std::iter::once(2)
        .chain(fields.iter().map(|_| FIELD_HEIGHT))
        .chain(actions.iter().map(action_height))
        .collect();
    let constraints: Vec<Constraint> = heights.iter().copied().map(Constraint::Length).collect();
    let content_height: u16 = heights.iter().sum();

    let card = centered(area, CARD_WIDTH, content_height + 2);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.input_outline))
        .style(Style::default().bg(palette.background));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    draw_header(frame, rows[0], flow.title(), theme, palette);

    for (index, field) in fields.iter().enumerate() {
        draw_field(
            frame,
            rows[index + 1],
            field,
            controller.error_for(field.name()),
            focus == Focus::Field(index),
            palette,
        );
    }

    let busy = controller.is_busy();
    for (offset, action) in actions.iter().enumerate() {
        let area = rows[fields.len() + 1 + offset];
        let is_focused = focus == Focus::Action(*action);
        match action {
            FormAction::Submit => {
                let label = if busy {
                    format!("{} Please wait…", spinner_frame())
                } else {
                    action.label(flow).to_string()
                };
                render_button(frame, area, &label, is_focused, !busy, palette);
            }
            _ => draw_link_row(frame, area, *action, flow, is_focused, palette),
        }
    }
}

fn draw_header(frame: &mut Frame, area: Rect, title: &str, theme: Theme, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(10)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            title,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(theme.toggle_icon(), Style::default().fg(palette.secondary)),
            Span::styled(" ^T", Style::default().fg(palette.placeholder)),
        ]))
        .alignment(Alignment::Right),
        chunks[1],
    );
}

fn draw_link_row(
    frame: &mut Frame,
    area: Rect,
    action: FormAction,
    flow: FlowKind,
    is_focused: bool,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    if let Some(prompt) = action.prompt(flow) {
        frame.render_widget(
            Paragraph::new(Span::styled(prompt, Style::default().fg(palette.placeholder)))
                .alignment(Alignment::Center),
            chunks[0],
        );
    }
    render_link(frame, chunks[1], action.label(flow), is_focused, palette);
}

fn action_height(action: &FormAction) -> u16 {
    match action {
        FormAction::Submit => BUTTON_HEIGHT,
        // prompt line + link line
        _ => 2,
    }
}

fn spinner_frame() -> &'static str {
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    SPINNER[(millis / 120) as usize % SPINNER.len()]
}

/// A rect of at most `width` x `height` centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
