//! Cursor over a fixed, ordered list of steps.

/// Position within an immutable sequence of items.
///
/// The sequence is fixed at construction. The index always points at a valid
/// item, or is `0` when the sequence is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCursor<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> StepCursor<T> {
    /// Starts at the first item.
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }

    /// Current position.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at the cursor, `None` when empty.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// Returns `true` on the first item.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Returns `true` on the last item, or when empty.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.items.len()
    }

    /// Moves forward one step. Returns `false` when already on the last item.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Moves back one step. Returns `false` when already on the first item.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Moves forward, wrapping from the last item to the first.
    pub fn advance_wrapping(&mut self) {
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
        }
    }

    /// Returns to the first item.
    pub fn rewind(&mut self) {
        self.index = 0;
    }

    /// Ratio of `steps` to the sequence length, `0.0` for an empty sequence.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self, steps: usize) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        (steps.min(self.items.len()) as f64) / (self.items.len() as f64)
    }
}
