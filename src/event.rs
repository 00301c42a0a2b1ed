use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyboardEnhancementFlags,
    MouseEvent, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(#[allow(dead_code)] u16, #[allow(dead_code)] u16),
}

pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    _tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let _tx = tx.clone();

        thread::spawn(move || {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    let app_event = match event::read() {
                        Ok(Event::Key(key)) => AppEvent::Key(key),
                        Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                        Ok(Event::Resize(w, h)) => AppEvent::Resize(w, h),
                        _ => continue,
                    };
                    if tx.send(app_event).is_err() {
                        return;
                    }
                } else if tx.send(AppEvent::Tick).is_err() {
                    return;
                }
            }
        });

        Self { rx, _tx }
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}

/// Modifier-only presses and repeat/release reporting need the escape-code
/// flags; alternate keys make Shift+1 arrive as `!` rather than `1` + SHIFT.
pub fn keyboard_flags() -> KeyboardEnhancementFlags {
    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
        | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
        | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
}

/// Terminal-wide input subscriptions, held for as long as the dashboard runs.
///
/// Mouse capture keeps the terminal emulator from handling right clicks
/// itself, so they arrive as ordinary mouse-down events. Everything acquired
/// in `acquire` is released on drop, including during a panic unwind.
pub struct InputCapture {
    keyboard_enhanced: bool,
}

impl InputCapture {
    pub fn acquire() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let keyboard_enhanced =
            execute!(stdout, PushKeyboardEnhancementFlags(keyboard_flags())).is_ok();

        log::debug!("input capture acquired (keyboard enhancement: {keyboard_enhanced})");
        Ok(Self { keyboard_enhanced })
    }
}

impl Drop for InputCapture {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.keyboard_enhanced {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        log::debug!("input capture released");
    }
}
