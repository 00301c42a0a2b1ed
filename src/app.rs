use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::activity::input::{key_down_symbol, pointer_down};
use crate::activity::state::normalize_key_label;
use crate::activity::{ActivityState, ActivityStore, PointerButton};
use crate::config::Config;
use crate::ui::components::top_keys::display_label;
use crate::ui::layout::DashboardLayout;
use crate::ui::theme::Theme;

pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub store: ActivityStore,
    pub should_quit: bool,
    /// Last drawn frame size, for hit-testing the reset control.
    pub viewport: Rect,
    /// A primary press started on the reset control and has not been released.
    pub reset_armed: bool,
    last_input: Option<(String, Instant)>,
}

impl App {
    pub fn new(config: Config, theme: Theme, store: ActivityStore) -> Self {
        Self {
            config,
            theme,
            store,
            should_quit: false,
            viewport: Rect::default(),
            reset_armed: false,
            last_input: None,
        }
    }

    pub fn state(&self) -> &ActivityState {
        self.store.state()
    }

    pub fn last_input(&self) -> Option<&str> {
        self.last_input.as_ref().map(|(label, _)| label.as_str())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.should_quit = true;
            return;
        }

        let Some(symbol) = key_down_symbol(&key) else {
            return;
        };
        self.store.key_down(&symbol);
        self.note_input(display_label(&normalize_key_label(&symbol)));
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let on_reset =
            DashboardLayout::new(self.viewport).hits_reset(mouse.column, mouse.row);

        if let Some(button) = pointer_down(&mouse) {
            self.store.pointer_down(button);
            self.note_input(
                match button {
                    PointerButton::Primary => "Left click",
                    PointerButton::Secondary => "Right click",
                    PointerButton::Auxiliary => "Middle click",
                }
                .to_string(),
            );
            self.reset_armed = button == PointerButton::Primary && on_reset;
            return;
        }

        if let MouseEventKind::Up(MouseButton::Left) = mouse.kind {
            if self.reset_armed && on_reset {
                self.reset();
            }
            self.reset_armed = false;
        }
    }

    pub fn reset(&mut self) {
        self.store.reset();
        self.last_input = None;
    }

    /// Forget the last input once it has been shown long enough.
    pub fn tick(&mut self) {
        let ttl = Duration::from_millis(self.config.last_input_ms);
        if let Some((_, at)) = self.last_input
            && at.elapsed() > ttl
        {
            self.last_input = None;
        }
    }

    fn note_input(&mut self, label: String) {
        self.last_input = Some((label, Instant::now()));
    }
}
