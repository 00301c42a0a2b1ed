use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

pub struct CounterRow {
    pub label: &'static str,
    pub value: String,
    pub emphasized: bool,
}

impl CounterRow {
    pub fn new(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
            emphasized: false,
        }
    }

    pub fn emphasized(mut self) -> Self {
        self.emphasized = true;
        self
    }
}

/// Bordered box of label/value lines.
pub struct CounterPanel<'a> {
    pub title: &'a str,
    pub rows: Vec<CounterRow>,
    pub theme: &'a Theme,
}

impl<'a> CounterPanel<'a> {
    pub fn new(title: &'a str, rows: Vec<CounterRow>, theme: &'a Theme) -> Self {
        Self { title, rows, theme }
    }
}

impl Widget for CounterPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let label_width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0);

        let lines: Vec<Line> = self
            .rows
            .iter()
            .map(|row| {
                let value_style = if row.emphasized {
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors.fg())
                };
                Line::from(vec![
                    Span::styled(
                        format!("  {:<label_width$}  ", row.label),
                        Style::default().fg(colors.text_muted()),
                    ),
                    Span::styled(row.value.clone(), value_style),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
