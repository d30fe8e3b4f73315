// src/keys.rs

//! Maps key presses to application actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// An action requested through the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Quit,
    TogglePause,
    ToggleInfo,
    ToggleColors,
    ToggleHistory,
    ToggleHalfBlocks,
    Reset,
}

/// Translates a key event, if it is bound.
///
/// Only press events count; terminals that report release and repeat edges
/// must not double-trigger a toggle.
pub fn action_for(event: &KeyEvent) -> Option<UserAction> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    match event.code {
        KeyCode::Char('q') => Some(UserAction::Quit),
        KeyCode::Char('p') => Some(UserAction::TogglePause),
        KeyCode::Char('i') => Some(UserAction::ToggleInfo),
        KeyCode::Char('c') => Some(UserAction::ToggleColors),
        KeyCode::Char('h') => Some(UserAction::ToggleHistory),
        KeyCode::Char('2') => Some(UserAction::ToggleHalfBlocks),
        KeyCode::Char('r') => Some(UserAction::Reset),
        _ => None,
    }
}
