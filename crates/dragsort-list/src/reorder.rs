#![forbid(unsafe_code)]

//! Sequence ownership and the remove-then-insert reorder.
//!
//! [`ReorderEngine`] is the only writer of the list order. A reorder removes
//! the element at `from` and inserts it at `to`, where `to` is measured in the
//! array *after* the removal. For a drag this means `to` is exactly the new
//! index of the dragged item:
//!
//! ```text
//! [1 2 3 4 5 6 7 8]  reorder(3, 6)
//! remove 3  -> [1 2 3 5 6 7 8]
//! insert 6  -> [1 2 3 5 6 7 4 8]
//! ```
//!
//! # Invariants
//!
//! 1. The id multiset and the length never change.
//! 2. `reorder(i, i)` performs no write, so existing snapshots stay shared.
//! 3. Out-of-range indices are rejected before anything is touched.
//! 4. Results depend only on the input sequence and the two indices.

use std::fmt;

use crate::item::{Item, ItemId, Sequence};

/// Record of a reorder that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reorder {
    /// The item that moved.
    pub item_id: ItemId,
    /// Index before the move.
    pub from: usize,
    /// Index after the move.
    pub to: usize,
}

impl Reorder {
    /// Returns true if nothing moved.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Why a reorder was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderError {
    /// `index` is not a valid position in a sequence of `len` items.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for ReorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "reorder index {index} out of range for {len} items")
            }
        }
    }
}

impl std::error::Error for ReorderError {}

// ---------------------------------------------------------------------------
// ReorderEngine
// ---------------------------------------------------------------------------

/// Owner of the item order.
#[derive(Debug, Clone, Default)]
pub struct ReorderEngine {
    sequence: Sequence,
}

impl ReorderEngine {
    #[must_use]
    pub fn new(items: impl Into<Sequence>) -> Self {
        Self {
            sequence: items.into(),
        }
    }

    /// Current order.
    #[must_use]
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// A snapshot of the current order that stays valid across later reorders.
    #[must_use]
    pub fn snapshot(&self) -> Sequence {
        self.sequence.clone()
    }

    /// Replace the whole order, e.g. after the host reloaded its data.
    pub fn set_items(&mut self, items: impl Into<Sequence>) {
        self.sequence = items.into();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.sequence.get(index)
    }

    /// Identity lookup.
    #[must_use]
    pub fn current_index_of(&self, id: ItemId) -> Option<usize> {
        self.sequence.position_of(id)
    }

    /// Move the item at `from` so that it ends up at `to`.
    ///
    /// The new order is available from [`sequence`](Self::sequence)
    /// afterwards. `from == to` (both in range) succeeds without writing.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<Reorder, ReorderError> {
        let len = self.sequence.len();
        for index in [from, to] {
            if index >= len {
                return Err(ReorderError::IndexOutOfRange { index, len });
            }
        }

        let item_id = self.sequence[from].id;
        if from != to {
            let items = self.sequence.make_mut();
            let item = items.remove(from);
            items.insert(to, item);
        }

        Ok(Reorder { item_id, from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(n: u64) -> ReorderEngine {
        ReorderEngine::new(
            (1..=n)
                .map(|id| Item::new(id, id.to_string()))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn move_down_shifts_intervening_items_up() {
        let mut engine = engine(8);
        let reorder = engine.reorder(3, 6).expect("in range");
        assert_eq!(
            reorder,
            Reorder {
                item_id: 4,
                from: 3,
                to: 6
            }
        );
        assert_eq!(engine.sequence().ids(), vec![1, 2, 3, 5, 6, 7, 4, 8]);
    }

    #[test]
    fn move_up_shifts_intervening_items_down() {
        let mut engine = engine(6);
        engine.reorder(4, 1).expect("in range");
        assert_eq!(engine.sequence().ids(), vec![1, 5, 2, 3, 4, 6]);
    }

    #[test]
    fn adjacent_moves_are_swaps() {
        let mut engine = engine(4);
        engine.reorder(1, 2).expect("in range");
        assert_eq!(engine.sequence().ids(), vec![1, 3, 2, 4]);
        engine.reorder(2, 1).expect("in range");
        assert_eq!(engine.sequence().ids(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn move_to_ends() {
        let mut engine = engine(5);
        engine.reorder(0, 4).expect("in range");
        assert_eq!(engine.sequence().ids(), vec![2, 3, 4, 5, 1]);
        engine.reorder(4, 0).expect("in range");
        assert_eq!(engine.sequence().ids(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn same_index_does_not_write() {
        let mut engine = engine(5);
        let snapshot = engine.snapshot();
        let reorder = engine.reorder(2, 2).expect("in range");
        assert!(reorder.is_noop());
        assert!(engine.sequence().ptr_eq(&snapshot));
    }

    #[test]
    fn out_of_range_is_rejected_without_mutation() {
        let mut engine = engine(3);
        assert_eq!(
            engine.reorder(3, 0),
            Err(ReorderError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            engine.reorder(0, 7),
            Err(ReorderError::IndexOutOfRange { index: 7, len: 3 })
        );
        assert_eq!(engine.sequence().ids(), vec![1, 2, 3]);

        let mut empty = ReorderEngine::default();
        assert!(empty.reorder(0, 0).is_err());
    }

    #[test]
    fn snapshot_survives_reorder() {
        let mut engine = engine(4);
        let before = engine.snapshot();
        engine.reorder(0, 3).expect("in range");
        assert_eq!(before.ids(), vec![1, 2, 3, 4]);
        assert_eq!(engine.sequence().ids(), vec![2, 3, 4, 1]);
    }

    #[test]
    fn identity_lookup_follows_moves() {
        let mut engine = engine(5);
        assert_eq!(engine.current_index_of(2), Some(1));
        engine.reorder(1, 4).expect("in range");
        assert_eq!(engine.current_index_of(2), Some(4));
        assert_eq!(engine.current_index_of(99), None);
    }

    #[test]
    fn set_items_replaces_order() {
        let mut engine = engine(5);
        engine.set_items(vec![Item::new(10, "x")]);
        assert_eq!(engine.len(), 1);
        assert_eq!(engine.get(0).map(|i| i.id), Some(10));
    }

    #[test]
    fn error_display() {
        let err = ReorderError::IndexOutOfRange { index: 9, len: 4 };
        assert_eq!(err.to_string(), "reorder index 9 out of range for 4 items");
    }
}
