//! Splash screen rendering with ASCII art logo

use crate::state::{Palette, SplashState};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

const LOGO: [&str; 5] = [
    r"    _         _   _     _____ _",
    r"   / \  _   _| |_| |__ |  ___| | _____      __",
    r"  / _ \| | | | __| '_ \| |_  | |/ _ \ \ /\ / /",
    r" / ___ \ |_| | |_| | | |  _| | | (_) \ V  V /",
    r"/_/   \_\__,_|\__|_| |_|_|   |_|\___/ \_/\_/",
];

const HINT: &str = "Press any key to skip";

fn logo_width() -> u16 {
    LOGO.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState, palette: &Palette) {
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let style = Style::default()
        .fg(palette.button_background)
        .add_modifier(Modifier::BOLD);
    let logo_height = LOGO.len() as u16;
    let logo_width = logo_width();

    // The logo slides up by the scroll offset and may leave the screen
    let base_y = i32::from(area.y) + i32::from(area.height.saturating_sub(logo_height)) / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let lines_off_top = usize::try_from(-y_pos).unwrap_or(0);
    if lines_off_top >= LOGO.len() {
        return;
    }

    let visible: Vec<Line> = LOGO
        .iter()
        .skip(lines_off_top)
        .map(|l| Line::from(Span::styled(*l, style)))
        .collect();
    let logo_area = Rect {
        x: area.x + area.width.saturating_sub(logo_width) / 2,
        y: u16::try_from(y_pos).unwrap_or(area.y),
        width: logo_width.min(area.width),
        height: (visible.len() as u16).min(area.height),
    };
    frame.render_widget(Paragraph::new(visible), logo_area.intersection(area));

    if splash_state.scroll_offset < 1.0 && area.height >= 2 {
        let hint_width = HINT.len() as u16;
        let hint_area = Rect {
            x: area.x + area.width.saturating_sub(hint_width) / 2,
            y: area.y + area.height - 2,
            width: hint_width.min(area.width),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(HINT, Style::default().fg(palette.placeholder))),
            hint_area,
        );
    }
}
