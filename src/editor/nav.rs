//! Cursor movement, including sticky-column vertical navigation.

use super::position::{Position, byte_offset_at, rune_size_after, rune_size_before, visual_col};
use super::store::LineStore;

/// Movement direction for cursor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What a left move at column 0 does.
///
/// Historically this behavior flip-flopped between releases, so it is an
/// explicit policy instead of a hardcoded choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Stay put at the start of the line.
    #[default]
    Stop,
    /// Wrap to the end of the previous line.
    WrapPrevious,
}

/// Move one rune left. The line-start behavior follows `policy`.
pub fn move_left(store: &LineStore, pos: Position, policy: EdgePolicy) -> Position {
    if pos.offset > 0 {
        let k = rune_size_before(store.text(pos.line), pos.offset);
        return Position::new(pos.line, pos.offset - k);
    }
    match policy {
        EdgePolicy::WrapPrevious => match store.prev(pos.line) {
            Some(prev) => Position::new(prev, store.len(prev)),
            None => pos,
        },
        EdgePolicy::Stop => pos,
    }
}

/// Move one rune right; no-op at the end of the line.
pub fn move_right(store: &LineStore, pos: Position) -> Position {
    if pos.offset < store.len(pos.line) {
        let k = rune_size_after(store.text(pos.line), pos.offset);
        Position::new(pos.line, pos.offset + k)
    } else {
        pos
    }
}

/// Move to the previous line, aiming for the sticky visual column.
///
/// The target column is the larger of the remembered sticky column and the
/// current visual column; it is returned as the new sticky value, so the
/// desired column survives crossing shorter lines.
pub fn move_up(
    store: &LineStore,
    pos: Position,
    sticky: usize,
    tab_width: usize,
) -> (Position, usize) {
    match store.prev(pos.line) {
        Some(prev) => vertical_step(store, pos, prev, sticky, tab_width),
        None => (pos, sticky),
    }
}

/// Move to the next line; symmetric with [`move_up`].
pub fn move_down(
    store: &LineStore,
    pos: Position,
    sticky: usize,
    tab_width: usize,
) -> (Position, usize) {
    match store.next(pos.line) {
        Some(next) => vertical_step(store, pos, next, sticky, tab_width),
        None => (pos, sticky),
    }
}

fn vertical_step(
    store: &LineStore,
    pos: Position,
    target_line: super::store::LineId,
    sticky: usize,
    tab_width: usize,
) -> (Position, usize) {
    let col = sticky.max(visual_col(store.text(pos.line), pos.offset, tab_width));
    let offset = byte_offset_at(store.text(target_line), col, tab_width);
    (Position::new(target_line, offset), col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::edit::insert_text;

    const TAB: usize = 8;

    fn store_with_lines(lines: &[&str]) -> LineStore {
        let mut store = LineStore::new();
        let first = store.first();
        insert_text(&mut store, Position::new(first, 0), &lines.join("\n")).unwrap();
        store
    }

    #[test]
    fn test_move_left_steps_one_rune() {
        let store = store_with_lines(&["caf\u{e9}"]);
        let pos = Position::new(store.first(), 5);
        let out = move_left(&store, pos, EdgePolicy::Stop);
        assert_eq!(out.offset, 3);
    }

    #[test]
    fn test_move_left_at_start_stops_by_default() {
        let store = store_with_lines(&["ab", "cd"]);
        let pos = Position::new(store.last(), 0);
        let out = move_left(&store, pos, EdgePolicy::Stop);
        assert_eq!(out, pos);
    }

    #[test]
    fn test_move_left_at_start_wraps_with_policy() {
        let store = store_with_lines(&["ab", "cd"]);
        let pos = Position::new(store.last(), 0);
        let out = move_left(&store, pos, EdgePolicy::WrapPrevious);
        assert_eq!(out, Position::new(store.first(), 2));
    }

    #[test]
    fn test_move_left_wrap_policy_on_first_line_stops() {
        let store = store_with_lines(&["ab"]);
        let pos = Position::new(store.first(), 0);
        assert_eq!(move_left(&store, pos, EdgePolicy::WrapPrevious), pos);
    }

    #[test]
    fn test_move_right_steps_one_rune() {
        let store = store_with_lines(&["\u{e9}x"]);
        let pos = Position::new(store.first(), 0);
        let out = move_right(&store, pos);
        assert_eq!(out.offset, 2);
    }

    #[test]
    fn test_move_right_at_end_is_noop() {
        let store = store_with_lines(&["ab"]);
        let pos = Position::new(store.first(), 2);
        assert_eq!(move_right(&store, pos), pos);
    }

    #[test]
    fn test_move_up_at_first_line_is_noop() {
        let store = store_with_lines(&["ab", "cd"]);
        let pos = Position::new(store.first(), 1);
        let (out, sticky) = move_up(&store, pos, 0, TAB);
        assert_eq!(out, pos);
        assert_eq!(sticky, 0);
    }

    #[test]
    fn test_move_down_at_last_line_is_noop() {
        let store = store_with_lines(&["ab", "cd"]);
        let pos = Position::new(store.last(), 1);
        let (out, _) = move_down(&store, pos, 0, TAB);
        assert_eq!(out, pos);
    }

    #[test]
    fn test_vertical_move_preserves_visual_column() {
        let store = store_with_lines(&["hello", "world"]);
        let pos = Position::new(store.first(), 3);
        let (down, _) = move_down(&store, pos, 0, TAB);
        assert_eq!(down, Position::new(store.last(), 3));
    }

    #[test]
    fn test_vertical_move_clamps_to_shorter_line() {
        let store = store_with_lines(&["hello", "hi"]);
        let pos = Position::new(store.first(), 4);
        let (down, sticky) = move_down(&store, pos, 0, TAB);
        assert_eq!(down, Position::new(store.last(), 2));
        assert_eq!(sticky, 4);
    }

    #[test]
    fn test_sticky_column_survives_short_line() {
        let store = store_with_lines(&["hello", "hi", "world"]);
        let ids: Vec<_> = store.iter().collect();
        let pos = Position::new(ids[0], 4);
        let (mid, sticky) = move_down(&store, pos, 0, TAB);
        assert_eq!(mid.offset, 2);
        let (bottom, _) = move_down(&store, mid, sticky, TAB);
        assert_eq!(bottom, Position::new(ids[2], 4));
    }

    #[test]
    fn test_down_then_up_roundtrips_visual_column() {
        let store = store_with_lines(&["first line", "second"]);
        let pos = Position::new(store.first(), 7);
        let (down, sticky) = move_down(&store, pos, 0, TAB);
        let (up, _) = move_up(&store, down, sticky, TAB);
        assert_eq!(
            visual_col(store.text(up.line), up.offset, TAB),
            visual_col(store.text(pos.line), pos.offset, TAB)
        );
    }

    #[test]
    fn test_vertical_move_is_tab_aware() {
        // cursor after "x" on the second line sits at visual column 9;
        // moving up into "\tyz" lands after "\ty" (also column 9), not at
        // byte offset 9
        let store = store_with_lines(&["\tyz", "abcdefghx"]);
        let pos = Position::new(store.last(), 9);
        let (up, _) = move_up(&store, pos, 0, TAB);
        assert_eq!(up, Position::new(store.first(), 2));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn roundtrip_preserves_column_when_valid(
                top in "[a-p]{1,20}",
                bottom in "[a-p]{1,20}",
                start in 0..20usize,
            ) {
                let text = format!("{top}\n{bottom}");
                let store = store_with_lines(&[&text]);
                let start = start.min(top.len());
                let pos = Position::new(store.first(), start);
                let (down, sticky) = move_down(&store, pos, 0, TAB);
                // the landing column clamps to the shorter line
                prop_assert_eq!(down.offset, start.min(bottom.len()));
                // the sticky column carries the original target back up
                let (up, _) = move_up(&store, down, sticky, TAB);
                prop_assert_eq!(up, pos);
            }
        }
    }
}
