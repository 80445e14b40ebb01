//! Abstractions for count-based pagination.

use std::ops::Range;

/// Cursor counting the items of a sequence already taken page by page.
///
/// A [`Cursor`] never points past the end of the sequence it was advanced
/// over, so its [`position`] is always `<=` the sequence length.
///
/// [`position`]: Cursor::position
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Cursor {
    /// Number of items taken so far.
    position: usize,
}

impl Cursor {
    /// Creates a new [`Cursor`] pointing at the start of a sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    /// Returns the number of items taken so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Moves this [`Cursor`] back to the start of a sequence.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Takes the next [`Page`] of at most `limit` items from a sequence of
    /// `total` items, advancing this [`Cursor`] by the number of items taken.
    pub fn advance(&mut self, limit: usize, total: usize) -> Page {
        let start = self.position.min(total);
        let end = start.saturating_add(limit).min(total);
        self.position = end;
        Page {
            range: start..end,
            has_more: end < total,
        }
    }

    /// Indicates whether a sequence of `total` items has items this
    /// [`Cursor`] hasn't taken yet.
    #[must_use]
    pub const fn has_more(&self, total: usize) -> bool {
        self.position < total
    }
}

/// A page taken by a [`Cursor`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page {
    /// Range of the sequence indices covered by this [`Page`].
    pub range: Range<usize>,

    /// Indicator whether the sequence has more items after this [`Page`].
    pub has_more: bool,
}

impl Page {
    /// Returns the number of items in this [`Page`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Indicates whether this [`Page`] contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Returns the items of this [`Page`] from the provided sequence.
    ///
    /// Returns an empty slice if the sequence is shorter than the one this
    /// [`Page`] was taken from.
    #[must_use]
    pub fn of<'s, T>(&self, items: &'s [T]) -> &'s [T] {
        items.get(self.range.clone()).unwrap_or_default()
    }
}
