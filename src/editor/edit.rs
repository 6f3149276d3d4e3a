//! Edit operations: insertion, backspace/merge, line deletion.
//!
//! Every operation takes the position it should act at and returns the
//! position the cursor should occupy afterwards. Growth always happens
//! before mutation, so a failed growth leaves the buffer untouched.

use super::position::{Position, rune_size_before};
use super::store::{GrowError, LineStore};

/// Insert `text` at `pos`, splitting the line at each embedded newline.
///
/// The returned position sits after the last inserted rune. Inserting an
/// empty string is a no-op; text with N newlines produces N new lines.
pub fn insert_text(
    store: &mut LineStore,
    pos: Position,
    text: &str,
) -> Result<Position, GrowError> {
    if text.is_empty() {
        return Ok(pos);
    }

    let Some(head_len) = text.find('\n') else {
        store.grow(pos.line, text.len())?;
        store.insert_str(pos.line, pos.offset, text);
        return Ok(Position::new(pos.line, pos.offset + text.len()));
    };

    let head = &text[..head_len];
    store.grow(pos.line, head.len())?;
    store.insert_str(pos.line, pos.offset, head);
    let mut end = Position::new(pos.line, pos.offset + head.len());

    // Split: the rest of this line moves below the inserted text. Each
    // later segment starts a fresh line; the moved tail lands at the end
    // of the last one, which is also the final cursor position. One loop
    // iteration per newline, independent of the line count.
    let tail = store.split_off(end.line, end.offset);
    for segment in text[head_len + 1..].split('\n') {
        let line = store.new_line(Some(end.line), store.next(end.line));
        store.grow(line, segment.len())?;
        store.push_str(line, segment);
        end = Position::new(line, segment.len());
    }
    store.grow(end.line, tail.len())?;
    store.push_str(end.line, &tail);
    Ok(end)
}

/// Delete the rune before `pos`, merging with the previous line at offset 0.
///
/// At offset 0 of the first line this is a no-op.
pub fn backspace(store: &mut LineStore, pos: Position) -> Result<Position, GrowError> {
    if pos.offset > 0 {
        let k = rune_size_before(store.text(pos.line), pos.offset);
        store.remove_range(pos.line, pos.offset - k, pos.offset);
        return Ok(Position::new(pos.line, pos.offset - k));
    }

    let Some(prev) = store.prev(pos.line) else {
        return Ok(pos);
    };
    let join = store.len(prev);
    store.grow(prev, store.len(pos.line))?;
    let tail = store.split_off(pos.line, 0);
    store.push_str(prev, &tail);
    store.remove_line(pos.line);
    Ok(Position::new(prev, join))
}

/// Remove the line at `pos`.
///
/// The cursor lands at the start of the following line, or the end of the
/// preceding one. Deleting the only remaining line is a no-op.
pub fn delete_line(store: &mut LineStore, pos: Position) -> Position {
    let target = match (store.next(pos.line), store.prev(pos.line)) {
        (Some(next), _) => Position::new(next, 0),
        (None, Some(prev)) => Position::new(prev, store.len(prev)),
        (None, None) => return pos,
    };
    store.remove_line(pos.line);
    target
}
