//! Dashboard rendering: tab bar plus the Home, Profile and Settings tabs

use crate::app::App;
use crate::state::{DashboardTab, Palette, PresenceStatus};
use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Tabs, Wrap},
    Frame,
};

const SKILLS: [&str; 4] = ["Rust", "Terminal UIs", "Async services", "UI/UX Design"];

/// Draw the dashboard
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.state.theme.palette();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .margin(1)
        .split(area);

    draw_tabs(frame, chunks[0], app.state.dashboard_tab, palette);

    match app.state.dashboard_tab {
        DashboardTab::Home => draw_home(frame, chunks[1], app, palette),
        DashboardTab::Profile => draw_profile(frame, chunks[1], app, palette),
        DashboardTab::Settings => draw_settings(frame, chunks[1], app, palette),
    }
}

fn draw_tabs(frame: &mut Frame, area: Rect, selected: DashboardTab, palette: &Palette) {
    let titles: Vec<Line> = DashboardTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.label())))
        .collect();
    let index = DashboardTab::ALL
        .iter()
        .position(|tab| *tab == selected)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(index)
        .style(Style::default().fg(palette.placeholder))
        .highlight_style(
            Style::default()
                .fg(palette.active_outline)
                .add_modifier(Modifier::BOLD),
        )
        .block(panel(" Dashboard ", palette));
    frame.render_widget(tabs, area);
}

fn draw_home(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(SKILLS.len() as u16 + 2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let summary = Paragraph::new(
        "Welcome back. Your recent work, skills and progress at a glance.",
    )
    .wrap(Wrap { trim: true })
    .style(Style::default().fg(palette.text))
    .block(panel(" Summary ", palette));
    frame.render_widget(summary, chunks[0]);

    let skills: Vec<Line> = SKILLS
        .iter()
        .map(|skill| {
            Line::from(vec![
                Span::styled(" • ", Style::default().fg(palette.secondary)),
                Span::styled(*skill, Style::default().fg(palette.text)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(skills).block(panel(" Skills ", palette)),
        chunks[1],
    );

    let progress = &app.state.progress;
    let label = if progress.is_started() {
        format!("{:.0}%", progress.ratio() * 100.0)
    } else {
        "Press Enter to start progress".to_string()
    };
    let gauge = Gauge::default()
        .block(panel(" Progress ", palette))
        .gauge_style(
            Style::default()
                .fg(palette.button_background)
                .bg(palette.card),
        )
        .ratio(progress.ratio().clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, chunks[2]);
}

fn draw_profile(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let profile = &app.state.profile;
    let status_color = match profile.status {
        PresenceStatus::Online => palette.secondary,
        PresenceStatus::Busy => palette.error,
        PresenceStatus::Offline => palette.placeholder,
    };
    let notifications = if profile.notifications { "On" } else { "Off" };

    let signed_in = match profile.signed_in_at {
        Some(at) => format!("Signed in at {}", at.with_timezone(&Local).format("%H:%M")),
        None => "Signed in".to_string(),
    };

    let lines = vec![
        Line::from(Span::styled(
            signed_in,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        row(
            "Status",
            Span::styled(
                format!("● {}", profile.status.label()),
                Style::default().fg(status_color),
            ),
            "s",
            palette,
        ),
        row(
            "Notifications",
            Span::styled(notifications, Style::default().fg(palette.text)),
            "n",
            palette,
        ),
        Line::default(),
        Line::from(vec![
            Span::styled("[o] ", Style::default().fg(palette.secondary)),
            Span::styled(
                "Sign Out",
                Style::default()
                    .fg(palette.error)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(panel(" Profile ", palette)),
        area,
    );
}

fn draw_settings(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let theme = app.state.theme;
    let mode = if theme.is_dark() { "On" } else { "Off" };
    let lines = vec![
        row(
            "Dark mode",
            Span::styled(
                format!("{} {mode}", theme.toggle_icon()),
                Style::default().fg(palette.text),
            ),
            "d",
            palette,
        ),
        Line::default(),
        Line::from(Span::styled(
            "The theme applies to every screen and is saved to your config.",
            Style::default().fg(palette.placeholder),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel(" Settings ", palette)),
        area,
    );
}

fn row<'a>(label: &'a str, value: Span<'a>, key: &'a str, palette: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<16}"), Style::default().fg(palette.text)),
        value,
        Span::styled(format!("  [{key}]"), Style::default().fg(palette.placeholder)),
    ])
}

fn panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.input_outline))
        .style(Style::default().bg(palette.background))
}
