//! Delete-icon hit regions, keyed by rendered row index.
//!
//! The map is a paint cache: the render hook writes one entry per painted row
//! and the click handler reads it back. Row indices only mean something for
//! the item layout they were painted from, so every entry set is stamped with
//! the [`ItemCollection::revision`](crate::ItemCollection::revision) it was
//! painted under. Recording under a newer revision drops the older entries,
//! and hit-testing against a different revision finds nothing.

use std::collections::BTreeMap;

use mru_combo_core::{Point, Rect};

/// Row index to delete-icon rectangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteRegionMap {
    regions: BTreeMap<usize, Rect>,
    revision: Option<u64>,
}

impl DeleteRegionMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the delete-icon rectangle for `row`, painted under `revision`.
    ///
    /// Overwrites any earlier entry for the same row.
    pub fn record(&mut self, row: usize, rect: Rect, revision: u64) {
        if self.revision != Some(revision) {
            self.regions.clear();
            self.revision = Some(revision);
        }
        self.regions.insert(row, rect);
    }

    /// Rows whose delete region contains `point`, in ascending row order.
    ///
    /// Empty when the map was painted under a different revision.
    pub fn hit_test(&self, point: Point, revision: u64) -> Vec<usize> {
        if !self.is_current(revision) {
            return Vec::new();
        }
        self.regions
            .iter()
            .filter(|(_, rect)| rect.contains(point))
            .map(|(&row, _)| row)
            .collect()
    }

    /// Whether the entries were painted under `revision`.
    pub fn is_current(&self, revision: u64) -> bool {
        self.revision == Some(revision)
    }

    /// The recorded rectangle for `row`.
    pub fn get(&self, row: usize) -> Option<Rect> {
        self.regions.get(&row).copied()
    }

    /// Remove the entry for `row`.
    pub fn remove(&mut self, row: usize) -> Option<Rect> {
        self.regions.remove(&row)
    }

    /// Number of recorded rows.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no rows are recorded.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.regions.clear();
        self.revision = None;
    }
}
