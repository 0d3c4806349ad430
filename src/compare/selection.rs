//! Bounded selection of items marked for comparison.

use crate::catalog::Item;

/// Maximum number of items that can be compared at once.
pub const MAX_COMPARE_ITEMS: usize = 3;

/// Result of toggling an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The item was appended to the selection.
    Added,
    /// The item was already selected and has been removed.
    Removed,
    /// The selection is full; nothing changed.
    Saturated,
}

/// Ordered, duplicate-free set of at most [`MAX_COMPARE_ITEMS`] items.
///
/// Items keep the order in which they were added. Adding to a full set is
/// silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    items: Vec<Item>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(MAX_COMPARE_ITEMS),
        }
    }

    /// Add the item if absent and there is room, remove it if present.
    pub fn toggle(&mut self, item: &Item) -> ToggleOutcome {
        if self.remove(item.id).is_some() {
            return ToggleOutcome::Removed;
        }

        if self.is_full() {
            return ToggleOutcome::Saturated;
        }

        self.items.push(item.clone());
        ToggleOutcome::Added
    }

    /// Remove the item with the given id, returning it if it was selected.
    pub fn remove(&mut self, id: u32) -> Option<Item> {
        let index = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(index))
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Check whether an item is selected.
    pub fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    /// Selected items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at a display slot.
    pub fn get(&self, slot: usize) -> Option<&Item> {
        self.items.get(slot)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_COMPARE_ITEMS
    }

    /// Number of free slots.
    pub fn remaining(&self) -> usize {
        MAX_COMPARE_ITEMS - self.items.len()
    }

    pub fn capacity(&self) -> usize {
        MAX_COMPARE_ITEMS
    }
}
