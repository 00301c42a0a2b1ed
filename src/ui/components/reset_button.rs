use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

pub struct ResetButton<'a> {
    pub pressed: bool,
    pub theme: &'a Theme,
}

impl<'a> ResetButton<'a> {
    pub fn new(pressed: bool, theme: &'a Theme) -> Self {
        Self { pressed, theme }
    }
}

impl Widget for ResetButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let (border, label) = if self.pressed {
            (
                Style::default().fg(colors.warning()),
                Style::default()
                    .fg(colors.button_fg())
                    .bg(colors.warning())
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(colors.button_bg()),
                Style::default()
                    .fg(colors.button_fg())
                    .bg(colors.button_bg())
                    .add_modifier(Modifier::BOLD),
            )
        };

        let block = Block::bordered().border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Span::styled(" Reset ", label))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
