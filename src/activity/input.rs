use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MediaKeyCode, ModifierKeyCode, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::activity::state::PointerButton;

/// Button of a mouse-down event. Release, drag, move and scroll report `None`.
pub fn pointer_down(event: &MouseEvent) -> Option<PointerButton> {
    match event.kind {
        MouseEventKind::Down(button) => Some(match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Auxiliary,
        }),
        _ => None,
    }
}

/// Key symbol of a key-down event, spelled the way a browser reports
/// `KeyboardEvent.key`. Auto-repeat counts as key-down; release does not.
pub fn key_down_symbol(event: &KeyEvent) -> Option<String> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    Some(key_symbol(event.code))
}

pub fn key_symbol(code: KeyCode) -> String {
    let name = match code {
        KeyCode::Char(ch) => return ch.to_string(),
        KeyCode::F(n) => return format!("F{n}"),
        KeyCode::Media(media) => media_symbol(media),
        KeyCode::Modifier(modifier) => modifier_symbol(modifier),
        KeyCode::Backspace => "Backspace",
        KeyCode::Enter => "Enter",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Tab | KeyCode::BackTab => "Tab",
        KeyCode::Delete => "Delete",
        KeyCode::Insert => "Insert",
        KeyCode::Null => "Unidentified",
        KeyCode::Esc => "Escape",
        KeyCode::CapsLock => "CapsLock",
        KeyCode::ScrollLock => "ScrollLock",
        KeyCode::NumLock => "NumLock",
        KeyCode::PrintScreen => "PrintScreen",
        KeyCode::Pause => "Pause",
        KeyCode::Menu => "ContextMenu",
        KeyCode::KeypadBegin => "Clear",
    };
    name.to_string()
}

fn media_symbol(media: MediaKeyCode) -> &'static str {
    match media {
        MediaKeyCode::Play => "MediaPlay",
        MediaKeyCode::Pause => "MediaPause",
        MediaKeyCode::PlayPause => "MediaPlayPause",
        MediaKeyCode::Reverse => "MediaReverse",
        MediaKeyCode::Stop => "MediaStop",
        MediaKeyCode::FastForward => "MediaFastForward",
        MediaKeyCode::Rewind => "MediaRewind",
        MediaKeyCode::TrackNext => "MediaTrackNext",
        MediaKeyCode::TrackPrevious => "MediaTrackPrevious",
        MediaKeyCode::Record => "MediaRecord",
        MediaKeyCode::LowerVolume => "AudioVolumeDown",
        MediaKeyCode::RaiseVolume => "AudioVolumeUp",
        MediaKeyCode::MuteVolume => "AudioVolumeMute",
    }
}

// Left and right variants share one symbol, as in the browser.
fn modifier_symbol(modifier: ModifierKeyCode) -> &'static str {
    match modifier {
        ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => "Shift",
        ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => "Control",
        ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => "Alt",
        ModifierKeyCode::LeftSuper
        | ModifierKeyCode::RightSuper
        | ModifierKeyCode::LeftMeta
        | ModifierKeyCode::RightMeta => "Meta",
        ModifierKeyCode::LeftHyper | ModifierKeyCode::RightHyper => "Hyper",
        ModifierKeyCode::IsoLevel3Shift => "AltGraph",
        ModifierKeyCode::IsoLevel5Shift => "Level5Shift",
    }
}
