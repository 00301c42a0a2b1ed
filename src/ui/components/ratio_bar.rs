use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::ui::theme::Theme;

/// Single-row bar filled to `ratio` of its width.
pub struct RatioBar<'a> {
    pub ratio: f64,
    pub fill: Option<Color>,
    pub theme: &'a Theme,
}

impl<'a> RatioBar<'a> {
    pub fn new(ratio: f64, theme: &'a Theme) -> Self {
        Self {
            ratio: ratio.clamp(0.0, 1.0),
            fill: None,
            theme,
        }
    }

    pub fn fill(mut self, color: Option<Color>) -> Self {
        self.fill = color;
        self
    }
}

impl Widget for RatioBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let colors = &self.theme.colors;
        let fill = self.fill.unwrap_or_else(|| colors.bar_filled());

        // Any non-zero ratio shows at least one cell
        let mut filled_width = (self.ratio * area.width as f64).round() as u16;
        if self.ratio > 0.0 {
            filled_width = filled_width.max(1);
        }

        for x in area.x..area.x + area.width {
            let style = if x < area.x + filled_width {
                Style::default().bg(fill)
            } else {
                Style::default().bg(colors.bar_empty())
            };
            buf[(x, area.y)].set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_cells(ratio: f64, width: u16) -> usize {
        let theme = Theme::default();
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        RatioBar::new(ratio, &theme).render(area, &mut buf);
        let fill = theme.colors.bar_filled();
        (0..width).filter(|x| buf[(*x, 0)].bg == fill).count()
    }

    #[test]
    fn test_fill_proportional() {
        assert_eq!(filled_cells(1.0, 20), 20);
        assert_eq!(filled_cells(0.5, 20), 10);
        assert_eq!(filled_cells(0.0, 20), 0);
    }

    #[test]
    fn test_small_ratio_shows_one_cell() {
        assert_eq!(filled_cells(0.001, 20), 1);
    }

    #[test]
    fn test_ratio_is_clamped() {
        assert_eq!(filled_cells(3.0, 8), 8);
    }
}
