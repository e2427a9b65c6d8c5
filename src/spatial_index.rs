//! R-tree spatial index over element bounding rectangles.
//!
//! Backs point and rectangle queries for hit-testing and marquee inclusion,
//! reducing them from O(n) scans to O(log n) candidate lookups. Visibility
//! and z-order are resolved by the store on top of the candidate sets
//! returned here, so toggling an element's visibility never forces a
//! reindex.

use crate::geometry::{Point, Rect};
use crate::types::ElementId;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// One indexed element rectangle.
#[derive(Debug, Clone, Copy)]
struct IndexEntry {
    id: ElementId,
    rect: Rect,
}

impl RTreeObject for IndexEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.rect.x, self.rect.y],
            [self.rect.max_x(), self.rect.max_y()],
        )
    }
}

impl PartialEq for IndexEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Spatial index mapping element ids to their canvas rectangles.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<IndexEntry>,
    entries: HashMap<ElementId, IndexEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load an index from element rectangles.
    pub fn from_rects<I>(rects: I) -> Self
    where
        I: IntoIterator<Item = (ElementId, Rect)>,
    {
        let entries: Vec<IndexEntry> = rects
            .into_iter()
            .map(|(id, rect)| IndexEntry { id, rect })
            .collect();
        let map = entries.iter().map(|e| (e.id, *e)).collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: map,
        }
    }

    /// Insert or replace an element's rectangle.
    pub fn upsert(&mut self, id: ElementId, rect: Rect) {
        if let Some(old) = self.entries.remove(&id) {
            self.tree.remove(&old);
        }
        let entry = IndexEntry { id, rect };
        self.tree.insert(entry);
        self.entries.insert(id, entry);
    }

    /// Drop an element from the index. Unknown ids are a no-op.
    pub fn remove(&mut self, id: ElementId) -> bool {
        match self.entries.remove(&id) {
            Some(entry) => {
                self.tree.remove(&entry);
                true
            }
            None => false,
        }
    }

    /// Ids of all elements whose rectangle contains the point (edges
    /// inclusive), in arbitrary order.
    pub fn query_point(&self, p: Point) -> Vec<ElementId> {
        let envelope = AABB::from_point([p.x, p.y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.rect.contains(p))
            .map(|entry| entry.id)
            .collect()
    }

    /// Ids of all elements whose rectangle intersects (or touches) `rect`,
    /// in arbitrary order.
    pub fn query_rect(&self, rect: &Rect) -> Vec<ElementId> {
        let envelope = AABB::from_corners([rect.x, rect.y], [rect.max_x(), rect.max_y()]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
