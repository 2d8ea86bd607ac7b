#![forbid(unsafe_code)]

//! Demo data.

use dragsort_list::{Item, ItemId};

/// `n` items with ids `1..=n`, each valued with its id as a string.
#[must_use]
pub fn sample_items(n: usize) -> Vec<Item> {
    (1..=n as ItemId)
        .map(|id| Item::new(id, id.to_string()))
        .collect()
}
