//! Item comparison.
//!
//! A [`CompareSession`] owns the items marked for comparison and the
//! show/hide state of their summary. It lives for one run of the
//! application and is reset by clearing the selection.
//!
//! The summary panel is drawn only when the gate is shown *and* at least
//! two items are selected. Removing a single item never touches the gate,
//! so dropping from two items to one hides the summary while the gate
//! still reads `Shown`.

mod gate;
mod selection;
mod summary;

pub use gate::VisibilityGate;
pub use selection::{MAX_COMPARE_ITEMS, SelectionSet, ToggleOutcome};
pub use summary::{ComparisonSummary, MIN_SUMMARY_ITEMS};

use crate::catalog::Item;

/// Comparison state for one application session.
#[derive(Debug, Clone, Default)]
pub struct CompareSession {
    selection: SelectionSet,
    gate: VisibilityGate,
}

impl CompareSession {
    /// Start an empty session with the summary hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle an item in or out of the comparison.
    pub fn toggle(&mut self, item: &Item) -> ToggleOutcome {
        let outcome = self.selection.toggle(item);
        tracing::debug!(
            item_id = item.id,
            ?outcome,
            selected = self.selection.len(),
            "comparison toggled"
        );
        outcome
    }

    /// Remove an item by id. The summary gate is left untouched.
    pub fn remove(&mut self, id: u32) -> Option<Item> {
        let removed = self.selection.remove(id);
        if removed.is_some() {
            tracing::debug!(item_id = id, selected = self.selection.len(), "comparison item removed");
        }
        removed
    }

    /// Remove the item shown in a panel slot.
    pub fn remove_slot(&mut self, slot: usize) -> Option<Item> {
        let id = self.selection.get(slot)?.id;
        self.remove(id)
    }

    /// Empty the selection and hide the summary.
    pub fn clear(&mut self) {
        self.selection.clear();
        self.gate.hide();
        tracing::debug!("comparison cleared");
    }

    /// Reset to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Flip the summary gate. Refused below two selected items.
    pub fn toggle_summary(&mut self) -> bool {
        if !self.can_toggle_summary() {
            tracing::debug!(
                selected = self.selection.len(),
                "summary toggle refused, not enough items"
            );
            return false;
        }
        self.gate.toggle();
        true
    }

    /// Whether the show/hide control is offered.
    pub fn can_toggle_summary(&self) -> bool {
        self.selection.len() >= MIN_SUMMARY_ITEMS
    }

    /// Whether the summary should actually be drawn.
    pub fn summary_visible(&self) -> bool {
        self.gate.is_shown() && self.selection.len() >= MIN_SUMMARY_ITEMS
    }

    /// Current statistics, recomputed from the selection.
    pub fn summary(&self) -> Option<ComparisonSummary<'_>> {
        ComparisonSummary::compute(self.selection.items())
    }

    pub fn contains(&self, id: u32) -> bool {
        self.selection.contains(id)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn gate(&self) -> VisibilityGate {
        self.gate
    }

    pub fn len(&self) -> usize {
        self.selection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }
}
