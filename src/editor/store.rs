//! Arena-backed storage for the line list.
//!
//! Lines live in a slab of slots indexed by [`LineId`]; deleted slots are
//! recycled through a free list. Lines still form a doubly linked sequence
//! via `prev`/`next` ids, but because ids are indices rather than pointers,
//! a stale [`LineId`] can never dangle.

use std::collections::TryReserveError;

use thiserror::Error;

/// Fixed growth step for line content buffers, in bytes.
pub const GROW_CHUNK: usize = 64;

/// Buffer growth could not obtain memory. The target line is unchanged.
#[derive(Debug, Error)]
#[error("failed to grow line buffer: {0}")]
pub struct GrowError(#[from] TryReserveError);

/// Index of a line slot in the store.
///
/// Ids are stable for the lifetime of the line but may be recycled after
/// `remove_line`; callers hold them only transiently (see
/// [`Position`](crate::editor::Position)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(usize);

#[derive(Debug, Clone, Default)]
struct Line {
    text: String,
    prev: Option<LineId>,
    next: Option<LineId>,
}

/// Owns every line of the buffer.
///
/// Invariants: the linked sequence is acyclic, `prev`/`next` links are
/// symmetric, and the store always contains at least one line.
#[derive(Debug, Clone)]
pub struct LineStore {
    slots: Vec<Line>,
    free: Vec<usize>,
    first: LineId,
    last: LineId,
}

impl LineStore {
    /// Create a store holding a single empty line.
    pub fn new() -> Self {
        Self {
            slots: vec![Line::default()],
            free: Vec::new(),
            first: LineId(0),
            last: LineId(0),
        }
    }

    /// Allocate an empty line linked between `prev` and `next`.
    ///
    /// A `None` neighbor makes the new line the first (resp. last) line of
    /// the sequence.
    pub fn new_line(&mut self, prev: Option<LineId>, next: Option<LineId>) -> LineId {
        let line = Line {
            text: String::new(),
            prev,
            next,
        };
        let id = if let Some(slot) = self.free.pop() {
            self.slots[slot] = line;
            LineId(slot)
        } else {
            self.slots.push(line);
            LineId(self.slots.len() - 1)
        };

        match prev {
            Some(p) => self.slots[p.0].next = Some(id),
            None => self.first = id,
        }
        match next {
            Some(n) => self.slots[n.0].prev = Some(id),
            None => self.last = id,
        }
        id
    }

    /// Unlink `id` and recycle its slot.
    ///
    /// Returns `false` without touching anything when `id` is the only
    /// remaining line; the store never becomes empty.
    pub fn remove_line(&mut self, id: LineId) -> bool {
        if self.line_count() == 1 {
            return false;
        }
        let prev = self.slots[id.0].prev;
        let next = self.slots[id.0].next;
        match prev {
            Some(p) => self.slots[p.0].next = next,
            None => self.first = next.unwrap_or(self.first),
        }
        match next {
            Some(n) => self.slots[n.0].prev = prev,
            None => self.last = prev.unwrap_or(self.last),
        }
        // Drop the content buffer now rather than when the slot is reused.
        self.slots[id.0] = Line::default();
        self.free.push(id.0);
        true
    }

    /// Ensure the line can take `min_extra` more bytes without reallocating.
    ///
    /// Capacity grows in [`GROW_CHUNK`] multiples. On failure the line is
    /// left exactly as it was; mutators call this before touching content so
    /// a failed growth never commits a partial edit.
    pub fn grow(&mut self, id: LineId, min_extra: usize) -> Result<(), GrowError> {
        let text = &mut self.slots[id.0].text;
        let spare = text.capacity() - text.len();
        if spare >= min_extra {
            return Ok(());
        }
        let additional = min_extra.div_ceil(GROW_CHUNK) * GROW_CHUNK;
        text.try_reserve_exact(additional)?;
        Ok(())
    }

    /// Content of a line.
    pub fn text(&self, id: LineId) -> &str {
        &self.slots[id.0].text
    }

    /// Content length of a line in bytes.
    pub fn len(&self, id: LineId) -> usize {
        self.slots[id.0].text.len()
    }

    /// Spare capacity of a line, in bytes.
    pub fn capacity(&self, id: LineId) -> usize {
        self.slots[id.0].text.capacity()
    }

    pub fn prev(&self, id: LineId) -> Option<LineId> {
        self.slots[id.0].prev
    }

    pub fn next(&self, id: LineId) -> Option<LineId> {
        self.slots[id.0].next
    }

    pub const fn first(&self) -> LineId {
        self.first
    }

    pub const fn last(&self) -> LineId {
        self.last
    }

    /// Number of live lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Zero-based index of a line in the sequence.
    pub fn index_of(&self, id: LineId) -> usize {
        let mut idx = 0;
        let mut cur = self.first;
        while cur != id {
            // A live id is always reachable from `first`.
            match self.slots[cur.0].next {
                Some(n) => {
                    cur = n;
                    idx += 1;
                }
                None => break,
            }
        }
        idx
    }

    /// Line id at a zero-based sequence index.
    pub fn line_at_index(&self, index: usize) -> Option<LineId> {
        let mut cur = Some(self.first);
        for _ in 0..index {
            cur = cur.and_then(|id| self.slots[id.0].next);
        }
        cur
    }

    /// Iterate line ids from first to last.
    pub fn iter(&self) -> impl Iterator<Item = LineId> + '_ {
        let mut cur = Some(self.first);
        std::iter::from_fn(move || {
            let id = cur?;
            cur = self.slots[id.0].next;
            Some(id)
        })
    }

    // --- Content mutators used by EditOps ---
    //
    // All of these operate on char boundaries; callers derive offsets from
    // the position model, which only produces boundary offsets.

    /// Insert `s` at a byte offset. Callers `grow` first so this never
    /// reallocates.
    pub fn insert_str(&mut self, id: LineId, offset: usize, s: &str) {
        self.slots[id.0].text.insert_str(offset, s);
    }

    /// Append `s` to the line. Callers `grow` first.
    pub fn push_str(&mut self, id: LineId, s: &str) {
        self.slots[id.0].text.push_str(s);
    }

    /// Remove the bytes in `start..end`, shifting the tail left.
    pub fn remove_range(&mut self, id: LineId, start: usize, end: usize) {
        self.slots[id.0].text.replace_range(start..end, "");
    }

    /// Truncate the line to `offset`, returning the removed tail.
    pub fn split_off(&mut self, id: LineId, offset: usize) -> String {
        self.slots[id.0].text.split_off(offset)
    }
}

impl Default for LineStore {
    fn default() -> Self {
        Self::new()
    }
}
