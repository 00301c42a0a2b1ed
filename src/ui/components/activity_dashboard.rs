use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::activity::ActivityState;
use crate::ui::components::counter_panel::{CounterPanel, CounterRow};
use crate::ui::components::reset_button::ResetButton;
use crate::ui::components::top_keys::TopKeys;
use crate::ui::layout::{DashboardLayout, LayoutTier};
use crate::ui::theme::Theme;

/// The whole screen, drawn from a snapshot and nothing else.
pub struct ActivityDashboard<'a> {
    pub state: &'a ActivityState,
    pub theme: &'a Theme,
    pub last_input: Option<&'a str>,
    pub reset_pressed: bool,
}

impl<'a> ActivityDashboard<'a> {
    pub fn new(state: &'a ActivityState, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            last_input: None,
            reset_pressed: false,
        }
    }

    pub fn last_input(mut self, last_input: Option<&'a str>) -> Self {
        self.last_input = last_input;
        self
    }

    pub fn reset_pressed(mut self, pressed: bool) -> Self {
        self.reset_pressed = pressed;
        self
    }

    fn render_header(&self, area: Rect, tier: LayoutTier, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let mut spans = vec![Span::styled(
            " keytally ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        )];
        if tier == LayoutTier::Wide {
            spans.push(Span::styled(
                " Activity Tracker",
                Style::default().fg(colors.text_muted()).bg(colors.header_bg()),
            ));
        }
        if let Some(last) = self.last_input {
            spans.push(Span::styled(
                "  | last: ",
                Style::default().fg(colors.text_muted()).bg(colors.header_bg()),
            ));
            spans.push(Span::styled(
                last.to_string(),
                Style::default()
                    .fg(colors.accent())
                    .bg(colors.header_bg())
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(colors.header_bg()))
            .render(area, buf);
    }

    fn render_instructions(&self, area: Rect, buf: &mut Buffer) {
        let muted = Style::default().fg(self.theme.colors.text_muted());
        let key = Style::default().fg(self.theme.colors.accent());
        let lines = vec![
            Line::from(Span::styled(
                "Left or right click anywhere to count clicks.",
                muted,
            )),
            Line::from(Span::styled(
                "Every key press is counted, letters case-insensitively.",
                muted,
            )),
            Line::from(vec![
                Span::styled("[Reset]", key),
                Span::styled(" clears all counts  ", muted),
                Span::styled("[Ctrl+C]", key),
                Span::styled(" quit", muted),
            ]),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

impl Widget for ActivityDashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        Block::default()
            .style(Style::default().bg(colors.bg()))
            .render(area, buf);

        let layout = DashboardLayout::new(area);
        let state = self.state;

        self.render_header(layout.header, layout.tier, buf);

        CounterPanel::new(
            "Mouse",
            vec![
                CounterRow::new("Left clicks", state.left_clicks),
                CounterRow::new("Right clicks", state.right_clicks),
                CounterRow::new("Total clicks", state.total_clicks()).emphasized(),
            ],
            self.theme,
        )
        .render(layout.clicks, buf);

        CounterPanel::new(
            "Keyboard",
            vec![
                CounterRow::new("Total keys", state.total_keys()).emphasized(),
                CounterRow::new("Distinct keys", state.distinct_keys()),
            ],
            self.theme,
        )
        .render(layout.keys, buf);

        TopKeys::new(state, self.theme).render(layout.ranking, buf);
        ResetButton::new(self.reset_pressed, self.theme).render(layout.reset_button, buf);
        self.render_instructions(layout.instructions, buf);
    }
}
