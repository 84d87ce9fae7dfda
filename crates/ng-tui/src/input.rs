//! Input handling - convert key events to screen actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ng_core::Difficulty;

/// Actions on the difficulty menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Up,
    Down,
    Select,
    Pick(Difficulty),
    ToggleTheme,
    ToggleSound,
    Quit,
}

/// Actions while a round is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAction {
    Type(char),
    Backspace,
    Clear,
    Submit,
    Back,
}

/// Ctrl-C quits from every screen
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Convert a key event to a menu action
pub fn key_to_menu_action(key: KeyEvent) -> Option<MenuAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(MenuAction::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => Some(MenuAction::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuAction::Select),

        KeyCode::Char('1') | KeyCode::Char('e') => Some(MenuAction::Pick(Difficulty::Easy)),
        KeyCode::Char('2') | KeyCode::Char('m') => Some(MenuAction::Pick(Difficulty::Medium)),
        KeyCode::Char('3') | KeyCode::Char('h') => Some(MenuAction::Pick(Difficulty::Hard)),

        KeyCode::Char('t') => Some(MenuAction::ToggleTheme),
        KeyCode::Char('s') => Some(MenuAction::ToggleSound),

        KeyCode::Char('q') | KeyCode::Esc => Some(MenuAction::Quit),

        _ => None,
    }
}

/// Convert a key event to a round action
///
/// Every printable character goes into the guess line; validation happens
/// on submit.
pub fn key_to_round_action(key: KeyEvent) -> Option<RoundAction> {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(RoundAction::Clear)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(RoundAction::Type(c))
        }
        KeyCode::Backspace => Some(RoundAction::Backspace),
        KeyCode::Enter => Some(RoundAction::Submit),
        KeyCode::Esc => Some(RoundAction::Back),
        _ => None,
    }
}

/// Whether a key closes the outcome dialog
pub fn dismisses_dialog(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q')
    )
}
