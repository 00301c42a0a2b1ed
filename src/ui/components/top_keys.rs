use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::activity::{ActivityState, TOP_KEYS_LIMIT};
use crate::ui::components::ratio_bar::RatioBar;
use crate::ui::theme::Theme;

const MAX_LABEL_CHARS: usize = 8;
const RANK_WIDTH: u16 = 5;
const LABEL_WIDTH: u16 = MAX_LABEL_CHARS as u16 + 3;
const COUNT_WIDTH: u16 = 9;

/// Ranked list of the most pressed keys.
pub struct TopKeys<'a> {
    state: &'a ActivityState,
    theme: &'a Theme,
}

impl<'a> TopKeys<'a> {
    pub fn new(state: &'a ActivityState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

/// Label as shown in the ranking: the space key is named, and anything
/// longer than eight characters is cut with an ellipsis.
pub fn display_label(label: &str) -> String {
    if label == " " {
        return "Space".to_string();
    }
    if label.chars().count() > MAX_LABEL_CHARS {
        let head: String = label.chars().take(MAX_LABEL_CHARS).collect();
        format!("{head}\u{2026}")
    } else {
        label.to_string()
    }
}

impl Widget for TopKeys<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" Top {TOP_KEYS_LIMIT} Keys "))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let ranked = self.state.top_keys(TOP_KEYS_LIMIT);
        if ranked.is_empty() {
            let placeholder = Paragraph::new(vec![
                Line::default(),
                Line::from(Span::styled(
                    "No keys pressed yet. Start typing!",
                    Style::default().fg(colors.text_muted()),
                )),
            ])
            .alignment(Alignment::Center);
            placeholder.render(inner, buf);
            return;
        }

        let leader = ranked[0].1.max(1) as f64;

        for (i, (label, count)) in ranked.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let position = i + 1;
            let row = Rect::new(inner.x, y, inner.width, 1);
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(RANK_WIDTH),
                    Constraint::Length(LABEL_WIDTH),
                    Constraint::Min(0),
                    Constraint::Length(COUNT_WIDTH),
                ])
                .split(row);

            let podium = colors.rank(position);
            let (rank_style, label_style) = match podium {
                Some(color) => (
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                None => (
                    Style::default().fg(colors.text_muted()),
                    Style::default().fg(colors.fg()),
                ),
            };

            Paragraph::new(Span::styled(format!(" #{position}"), rank_style))
                .render(cols[0], buf);
            Paragraph::new(Span::styled(display_label(label), label_style)).render(cols[1], buf);
            RatioBar::new(*count as f64 / leader, self.theme)
                .fill(podium)
                .render(cols[2], buf);
            Paragraph::new(Span::styled(count.to_string(), label_style))
                .alignment(Alignment::Right)
                .render(cols[3], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_lines(state: &ActivityState, width: u16, height: u16) -> Vec<String> {
        let theme = Theme::default();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        TopKeys::new(state, &theme).render(area, &mut buf);
        (0..height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("A"), "A");
        assert_eq!(display_label("Backspace"), "Backspac\u{2026}");
        assert_eq!(display_label("ArrowUp"), "ArrowUp");
        assert_eq!(display_label("CapsLock"), "CapsLock");
        assert_eq!(display_label(" "), "Space");
    }

    #[test]
    fn test_placeholder_when_empty() {
        let lines = render_lines(&ActivityState::default(), 60, 8);
        assert!(lines.iter().any(|l| l.contains("No keys pressed yet")));
    }

    #[test]
    fn test_shows_at_most_ten_rows() {
        let state = "ABCDEFGHIJKL"
            .chars()
            .fold(ActivityState::default(), |s, c| s.with_key_down(&c.to_string()));
        let lines = render_lines(&state, 60, 16);
        let rows = lines.iter().filter(|l| l.contains(" #")).count();
        assert_eq!(rows, 10);
        assert!(lines.iter().any(|l| l.contains("#10")));
        assert!(!lines.iter().any(|l| l.contains("#11")));
    }

    #[test]
    fn test_rows_ordered_by_count() {
        let mut state = ActivityState::default();
        for key in ["a", "Enter", "Enter", "b", "Enter", "b"] {
            state = state.with_key_down(key);
        }
        let lines = render_lines(&state, 60, 8);
        // Row 0 is the border
        assert!(lines[1].contains("#1") && lines[1].contains("Enter") && lines[1].contains('3'));
        assert!(lines[2].contains("#2") && lines[2].contains('B'));
        assert!(lines[3].contains("#3") && lines[3].contains('A'));
        assert!(!lines.iter().any(|l| l.contains("No keys pressed yet")));
    }
}
