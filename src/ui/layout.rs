//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::{DashboardTab, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.state.theme.palette();
    let mut spans = vec![Span::styled(
        format!(" {} ", get_hints(app)),
        Style::default().fg(palette.placeholder),
    )];

    if let Some(status) = &app.state.status_message {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            status.text.as_str(),
            Style::default().fg(palette.secondary),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.card)),
        area,
    );

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(quit_hint).style(Style::default().fg(palette.text).bg(palette.card)),
        quit_area,
    );
}

/// Key hints for the visible screen
fn get_hints(app: &App) -> &'static str {
    match app.state.current_screen() {
        Screen::Login | Screen::Register | Screen::Recover => {
            let busy = app
                .state
                .current_form()
                .is_some_and(|form| form.controller.is_busy());
            if busy {
                "Esc: cancel request"
            } else if app.state.depth() > 1 {
                "Tab/↑↓: move | Enter: select | Esc: back | ^T: theme"
            } else {
                "Tab/↑↓: move | Enter: select | ^T: theme"
            }
        }
        Screen::Dashboard => match app.state.dashboard_tab {
            DashboardTab::Home => "←→/1-3: tabs | Enter: start progress | q: quit",
            DashboardTab::Profile => "←→/1-3: tabs | s: status | n: notifications | o: sign out",
            DashboardTab::Settings => "←→/1-3: tabs | d: dark mode | q: quit",
        },
    }
}
