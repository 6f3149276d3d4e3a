use crate::app::{Mode, Model};
use crate::editor::{Direction, GrowError};

/// All possible events and actions in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Move the cursor one step
    Move(Direction),
    /// Enter insert mode at the cursor (`i`)
    EnterInsert,
    /// Enter insert mode one rune to the right (`a`)
    EnterInsertAfter,
    /// Leave insert mode, stepping one rune left (Esc)
    LeaveInsert,
    /// Insert a rune at the cursor
    InsertChar(char),
    /// Split the line at the cursor (Enter)
    InsertNewline,
    /// Delete the rune before the cursor (Backspace)
    Backspace,
    /// Delete the cursor line (`:d`)
    DeleteLine,
    /// Write the buffer, optionally renaming it (`:w`, `:w name`);
    /// performed as a side effect in the event loop
    Write(Option<String>),
    /// Quit, refusing on unsaved changes unless forced (`:q`, `:q!`)
    Quit { force: bool },
    /// Terminal resized
    Resize(u16, u16),
}

/// Parse a completed `:` command. Unrecognized input is silently ignored.
pub fn parse_command(cmd: &str) -> Option<Message> {
    match cmd {
        "q" => Some(Message::Quit { force: false }),
        "q!" => Some(Message::Quit { force: true }),
        "w" => Some(Message::Write(None)),
        "d" => Some(Message::DeleteLine),
        _ => match cmd.strip_prefix("w ") {
            Some(name) if !name.is_empty() => Some(Message::Write(Some(name.to_string()))),
            _ => None,
        },
    }
}

/// Pure state transition function.
///
/// Buffer growth failure is the one fatal error: it propagates out so the
/// event loop can tear the terminal down before exiting. Everything else is
/// absorbed into the model (status messages, no-ops at buffer edges).
pub fn update(mut model: Model, msg: Message) -> Result<Model, GrowError> {
    // Status messages are transient: any processed input clears the
    // previous one before the new message can set its own.
    model.status = None;

    match msg {
        Message::Move(direction) => model.buffer.move_cursor(direction),

        Message::EnterInsert => model.mode = Mode::Insert,
        Message::EnterInsertAfter => {
            model.buffer.move_cursor(Direction::Right);
            model.mode = Mode::Insert;
        }
        Message::LeaveInsert => {
            model.mode = Mode::Normal;
            model.buffer.step_left();
        }

        Message::InsertChar(ch) => model.buffer.insert_char(ch)?,
        Message::InsertNewline => model.buffer.insert_str("\n")?,
        Message::Backspace => model.buffer.backspace()?,
        Message::DeleteLine => model.buffer.delete_line(),

        Message::Quit { force } => {
            if force || !model.buffer.is_dirty() {
                model.should_quit = true;
            } else {
                model.show_status("unsaved changes; q! to override");
            }
        }

        Message::Resize(width, height) => {
            model.viewport.resize(width, height.saturating_sub(1));
        }

        // File writes are side effects, handled in the event loop.
        Message::Write(_) => {}
    }

    Ok(model)
}
