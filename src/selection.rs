//! Selection management for canvas elements.
//!
//! [`SelectionManager`] owns the set of selected element ids and is the
//! source of truth the host renders back as highlighted elements and the
//! bounding-box overlay. Every mutating operation reports whether the set
//! actually changed, which is the notify-on-change contract hosts use to
//! trigger re-renders; none of them can fail, and ids that no longer
//! resolve are treated as already deselected.

use crate::geometry::{Rect, bounding_box};
use crate::store::ElementStore;
use crate::types::ElementId;
use std::collections::HashSet;

/// The set of currently selected element ids.
#[derive(Debug, Default, Clone)]
pub struct SelectionManager {
    selected: HashSet<ElementId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with a single element.
    pub fn select_only(&mut self, id: ElementId) -> bool {
        if self.selected.len() == 1 && self.selected.contains(&id) {
            return false;
        }
        self.selected.clear();
        self.selected.insert(id);
        true
    }

    /// Remove the element if selected, add it otherwise (ctrl/cmd-click).
    pub fn toggle(&mut self, id: ElementId) -> bool {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        true
    }

    /// Add without removing others (shift-click).
    pub fn add(&mut self, id: ElementId) -> bool {
        self.selected.insert(id)
    }

    /// Empty the selection.
    pub fn clear(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.selected.clear();
        true
    }

    /// Replace the selection wholesale.
    pub fn set_many<I>(&mut self, ids: I) -> bool
    where
        I: IntoIterator<Item = ElementId>,
    {
        let next: HashSet<ElementId> = ids.into_iter().collect();
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    /// Replace the selection with every visible element intersecting `rect`.
    ///
    /// An empty result is a valid empty selection, not an error.
    pub fn set_from_rect(&mut self, rect: &Rect, store: &ElementStore) -> bool {
        self.set_many(store.intersecting(rect))
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The selected ids in unspecified order.
    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.selected.iter().copied()
    }

    /// The selected ids sorted ascending, for deterministic intent batches.
    pub fn sorted_ids(&self) -> Vec<ElementId> {
        let mut ids: Vec<ElementId> = self.selected.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// The single selected id, if the selection holds exactly one element.
    pub fn single(&self) -> Option<ElementId> {
        if self.selected.len() == 1 {
            self.selected.iter().next().copied()
        } else {
            None
        }
    }

    /// Combined bounding box of the selected, still-existing elements.
    ///
    /// Ids that no longer resolve contribute nothing; with no resolvable
    /// element this is [`Rect::ZERO`], which renderers must not draw.
    pub fn bounds(&self, store: &ElementStore) -> Rect {
        bounding_box(
            self.selected
                .iter()
                .filter_map(|id| store.get(*id))
                .map(|e| e.rect()),
        )
    }
}
