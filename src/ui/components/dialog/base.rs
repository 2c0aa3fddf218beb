//! Base dialog component

use crate::state::Palette;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    /// Accent for the title and border
    pub accent: Color,
    /// Message content, `\n` separates paragraphs
    pub message: &'a str,
    /// Hint shown under the message
    pub hint: Option<Line<'a>>,
    pub max_width: u16,
}

/// Render a centered modal dialog over whatever is on screen
pub fn render_dialog(frame: &mut Frame, config: DialogConfig, palette: &Palette) {
    const PADDING: u16 = 4;

    let area = frame.area();
    let max_width = config.max_width.min(area.width);
    let lines = wrap_text(
        config.message,
        usize::from(max_width.saturating_sub(PADDING + 2)),
    );

    let content_width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;
    let width = (content_width + PADDING + 2).min(max_width);

    // title, blank, message, optional blank + hint, borders
    let hint_rows = if config.hint.is_some() { 2 } else { 0 };
    let height = (2 + lines.len() as u16 + hint_rows + 2)
        .max(5)
        .min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog_area);

    let mut content = Vec::with_capacity(lines.len() + 4);
    content.push(Line::from(Span::styled(
        config.title,
        Style::default()
            .fg(config.accent)
            .add_modifier(Modifier::BOLD),
    )));
    content.push(Line::default());
    content.extend(lines.into_iter().map(Line::from));
    if let Some(hint) = config.hint {
        content.push(Line::default());
        content.push(hint);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(config.accent))
        .padding(ratatui::widgets::Padding::horizontal(1));
    let dialog = Paragraph::new(content)
        .block(block)
        .style(Style::default().fg(palette.text).bg(palette.card));

    frame.render_widget(dialog, dialog_area);
}

/// Greedy word wrap. Blank input lines are kept.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count();
            if current_width > 0 && current_width + 1 + word_width > max_width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_breaks_on_word_boundaries() {
        let lines = wrap_text("Password must be at least 6 characters", 16);
        assert_eq!(
            lines,
            vec!["Password must be", "at least 6", "characters"]
        );
    }

    #[test]
    fn test_wrap_keeps_explicit_newlines() {
        let lines = wrap_text("Please fix:\nInvalid email format", 40);
        assert_eq!(lines, vec!["Please fix:", "Invalid email format"]);
    }

    #[test]
    fn test_wrap_long_word_gets_own_line() {
        let lines = wrap_text("a averyveryverylongword b", 5);
        assert_eq!(lines, vec!["a", "averyveryverylongword", "b"]);
    }

    #[test]
    fn test_wrap_empty_message() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
