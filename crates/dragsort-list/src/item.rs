#![forbid(unsafe_code)]

//! List items and the copy-on-write [`Sequence`].

use std::ops::Deref;
use std::sync::Arc;

/// Stable identity of an [`Item`].
pub type ItemId = u64;

/// A single entry in a reorderable list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    /// Unique, stable identity. Never changes while the item moves.
    pub id: ItemId,
    /// Display value.
    pub value: String,
}

impl Item {
    #[must_use]
    pub fn new(id: ItemId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Sequence
// ---------------------------------------------------------------------------

/// Ordered list of items with value semantics.
///
/// Cloning is an `Arc` bump, so renderers can hold a snapshot for a frame.
/// Mutation is crate-private and goes through [`Arc::make_mut`]: if a
/// snapshot is still alive, the writer gets its own copy and the snapshot
/// keeps the order it was taken with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    items: Arc<Vec<Item>>,
}

impl Sequence {
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Item] {
        self.items.as_slice()
    }

    /// Item ids in render order.
    #[must_use]
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    /// Position of the item with `id`, if present.
    #[must_use]
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Returns true if `self` and `other` share the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    pub(crate) fn make_mut(&mut self) -> &mut Vec<Item> {
        Arc::make_mut(&mut self.items)
    }
}

impl Deref for Sequence {
    type Target = [Item];

    fn deref(&self) -> &[Item] {
        self.as_slice()
    }
}

impl From<Vec<Item>> for Sequence {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<Item> for Sequence {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Sequence {
        ["a", "b", "c"]
            .iter()
            .enumerate()
            .map(|(i, v)| Item::new(i as ItemId + 1, *v))
            .collect()
    }

    #[test]
    fn ids_and_positions() {
        let seq = abc();
        assert_eq!(seq.ids(), vec![1, 2, 3]);
        assert_eq!(seq.position_of(3), Some(2));
        assert_eq!(seq.position_of(9), None);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq[1].value, "b");
    }

    #[test]
    fn clone_shares_until_written() {
        let mut writer = abc();
        let snapshot = writer.clone();
        assert!(writer.ptr_eq(&snapshot));

        writer.make_mut().swap(0, 2);
        assert!(!writer.ptr_eq(&snapshot));
        assert_eq!(writer.ids(), vec![3, 2, 1]);
        assert_eq!(snapshot.ids(), vec![1, 2, 3]);
    }

    #[test]
    fn unshared_write_keeps_allocation() {
        let mut writer = abc();
        let before = Arc::as_ptr(&writer.items);
        writer.make_mut().swap(0, 1);
        assert_eq!(Arc::as_ptr(&writer.items), before);
    }

    #[test]
    fn iterates_by_reference() {
        let seq = abc();
        let values: Vec<&str> = (&seq).into_iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, ["a", "b", "c"]);
    }
}
