//! Key event classification shared by the screens.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling at the application level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed by an overlay.
    Consumed,
}

/// Checks if key forcibly quits from any screen.
#[must_use]
pub fn is_force_quit(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

/// Checks if key is a quit event on screens without text input.
#[must_use]
pub fn is_quit_event(key: &KeyEvent) -> bool {
    is_force_quit(key)
        || matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
}

/// Checks if key is a submit event.
#[must_use]
pub fn is_submit_event(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Enter,
            ..
        }
    )
}

/// Checks for `Ctrl+<c>`.
#[must_use]
pub fn is_ctrl_char(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

/// Release and repeat events are reported on some platforms; screens only react to presses.
#[must_use]
pub fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

/// Character a dialog resolves against, with Enter and Esc mapped to control codes.
#[must_use]
pub const fn dialog_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) => Some(c),
        KeyCode::Enter => Some('\n'),
        KeyCode::Esc => Some('\u{1b}'),
        _ => None,
    }
}
