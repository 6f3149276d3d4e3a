use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{Message, Mode};
use crate::editor::Direction;

/// What a key press asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum InputAction {
    /// Feed a message through `update`
    Dispatch(Message),
    /// Start command-line entry (`:`), a nested loop in the event loop
    BeginCommand,
}

/// Map a key press to an action for the current mode.
pub(super) fn action_for_key(mode: Mode, key: &KeyEvent) -> Option<InputAction> {
    match mode {
        Mode::Normal => normal_key(key),
        Mode::Insert => insert_key(key),
    }
}

fn normal_key(key: &KeyEvent) -> Option<InputAction> {
    let msg = match key.code {
        KeyCode::Char('h') | KeyCode::Left => Message::Move(Direction::Left),
        KeyCode::Char('j') | KeyCode::Down => Message::Move(Direction::Down),
        KeyCode::Char('k') | KeyCode::Up => Message::Move(Direction::Up),
        KeyCode::Char('l') | KeyCode::Right => Message::Move(Direction::Right),
        KeyCode::Char('i') => Message::EnterInsert,
        KeyCode::Char('a') => Message::EnterInsertAfter,
        KeyCode::Char(':') => return Some(InputAction::BeginCommand),
        _ => return None,
    };
    Some(InputAction::Dispatch(msg))
}

fn insert_key(key: &KeyEvent) -> Option<InputAction> {
    let msg = match key.code {
        KeyCode::Esc => Message::LeaveInsert,
        KeyCode::Backspace => Message::Backspace,
        KeyCode::Enter => Message::InsertNewline,
        KeyCode::Tab => Message::InsertChar('\t'),
        KeyCode::Left => Message::Move(Direction::Left),
        KeyCode::Right => Message::Move(Direction::Right),
        KeyCode::Up => Message::Move(Direction::Up),
        KeyCode::Down => Message::Move(Direction::Down),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Message::InsertChar(ch)
        }
        _ => return None,
    };
    Some(InputAction::Dispatch(msg))
}
