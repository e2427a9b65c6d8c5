//! Element store - the z-ordered element list and the mutation boundary.
//!
//! [`ElementStore`] owns the page's elements in z-order (last = topmost),
//! keeps the spatial index in sync, and answers the point/rectangle queries
//! the interaction core needs for hit-testing. It also implements
//! [`MutationSink`], so it doubles as the reference receiver for the
//! move/resize intents the interaction engine emits; a real host forwards
//! those intents to its persistence and undo layers as well.

use crate::error::CanvasError;
use crate::geometry::{Point, Rect, Size, Vec2};
use crate::spatial_index::SpatialIndex;
use crate::types::{Element, ElementContent, ElementId};
use std::collections::HashSet;
use std::path::Path;

/// Receiver for element mutation intents.
///
/// Implementations are responsible for persistence, undo-history recording
/// and re-rendering. The interaction engine never assumes synchronous
/// completion semantics beyond the call returning; failures are surfaced to
/// the implementation's caller and logged by the engine, which keeps its
/// gesture state either way.
pub trait MutationSink {
    /// Move every listed element by `delta`. Ids that no longer resolve are
    /// skipped.
    fn move_by(&mut self, ids: &[ElementId], delta: Vec2) -> anyhow::Result<()>;

    /// Set one element's size and position in a single step.
    fn resize_to(&mut self, id: ElementId, size: Size, position: Point) -> anyhow::Result<()>;
}

/// Z-ordered element list with spatial-indexed queries.
#[derive(Default)]
pub struct ElementStore {
    /// Elements in z-order; the last entry renders topmost.
    elements: Vec<Element>,
    index: SpatialIndex,
    next_id: ElementId,
}

impl ElementStore {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            index: SpatialIndex::new(),
            next_id: 1,
        }
    }

    /// Rebuild a store from an existing element list (z-order preserved).
    ///
    /// Fails if the list carries duplicate ids.
    pub fn from_elements(elements: Vec<Element>) -> Result<Self, CanvasError> {
        let mut seen = HashSet::new();
        for element in &elements {
            if !seen.insert(element.id) {
                return Err(CanvasError::DuplicateElement(element.id));
            }
        }

        let index = SpatialIndex::from_rects(elements.iter().map(|e| (e.id, e.rect())));
        let next_id = elements.iter().map(|e| e.id).max().unwrap_or(0) + 1;

        Ok(Self {
            elements,
            index,
            next_id,
        })
    }

    /// Add a new element on top of the z-order and return its id.
    pub fn insert(&mut self, position: Point, content: ElementContent) -> ElementId {
        let id = self.next_id;
        self.next_id += 1;

        let element = Element {
            id,
            position,
            size: content.default_size(),
            visible: true,
            locked: false,
            content,
        };
        self.index.upsert(id, element.rect());
        self.elements.push(element);
        id
    }

    /// Remove an element; unknown ids return `None`.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let pos = self.elements.iter().position(|e| e.id == id)?;
        self.index.remove(id);
        Some(self.elements.remove(pos))
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Mutable access to an element. Callers that change position or size
    /// must follow up with [`ElementStore::reindex`].
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Re-sync the spatial index after direct mutation of an element.
    pub fn reindex(&mut self, id: ElementId) {
        if let Some(element) = self.get(id) {
            let rect = element.rect();
            self.index.upsert(id, rect);
        }
    }

    pub fn set_visible(&mut self, id: ElementId, visible: bool) {
        if let Some(element) = self.get_mut(id) {
            element.visible = visible;
        }
    }

    pub fn set_locked(&mut self, id: ElementId, locked: bool) {
        if let Some(element) = self.get_mut(id) {
            element.locked = locked;
        }
    }

    /// Elements in z-order, bottom first.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Topmost visible element whose rectangle contains `p`.
    ///
    /// Candidates come from the spatial index; the z-order scan runs front
    /// to back over the candidate set only.
    pub fn topmost_at(&self, p: Point) -> Option<&Element> {
        crate::profile_scope!("hit_test_point");

        let candidates: HashSet<ElementId> = self.index.query_point(p).into_iter().collect();
        if candidates.is_empty() {
            return None;
        }

        self.elements
            .iter()
            .rev()
            .find(|e| e.visible && candidates.contains(&e.id))
    }

    /// Ids of all visible elements intersecting `rect`, in z-order.
    ///
    /// Intersection is sufficient for marquee inclusion; an element need not
    /// be fully enclosed.
    pub fn intersecting(&self, rect: &Rect) -> Vec<ElementId> {
        crate::profile_scope!("hit_test_rect");

        let candidates: HashSet<ElementId> = self.index.query_rect(rect).into_iter().collect();
        self.elements
            .iter()
            .filter(|e| e.visible && candidates.contains(&e.id))
            .map(|e| e.id)
            .collect()
    }

    /// Persist the element list as JSON.
    pub fn save(&self, path: &Path) -> Result<(), CanvasError> {
        let json = serde_json::to_string_pretty(&self.elements)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load an element list persisted by [`ElementStore::save`].
    pub fn load(path: &Path) -> Result<Self, CanvasError> {
        let json = std::fs::read_to_string(path)?;
        let elements: Vec<Element> = serde_json::from_str(&json)?;
        Self::from_elements(elements)
    }
}

impl MutationSink for ElementStore {
    fn move_by(&mut self, ids: &[ElementId], delta: Vec2) -> anyhow::Result<()> {
        for &id in ids {
            let Some(element) = self.get_mut(id) else {
                continue;
            };
            if element.locked {
                continue;
            }
            element.position += delta;
            self.reindex(id);
        }
        Ok(())
    }

    fn resize_to(&mut self, id: ElementId, size: Size, position: Point) -> anyhow::Result<()> {
        let Some(element) = self.get_mut(id) else {
            return Ok(());
        };
        if element.locked {
            return Ok(());
        }
        element.size = size;
        element.position = position;
        self.reindex(id);
        Ok(())
    }
}
