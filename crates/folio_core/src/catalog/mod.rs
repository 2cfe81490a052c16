//! Ordered project catalog.
//!
//! # Responsibility
//! - Own the ordered list of project records shown on the page.
//! - Provide the only two mutators: append and in-place patch.
//!
//! # Invariants
//! - Order is insertion order; nothing reorders, filters or deduplicates.
//! - No record is ever removed.
//! - Out-of-range replacement never mutates the catalog.

pub mod seed;
pub mod source;

use crate::model::project::{ProjectPatch, ProjectRecord};
use serde::{Deserialize, Serialize};

/// Ordered collection of project records.
///
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding `records` in the given order.
    pub fn from_records(records: Vec<ProjectRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
        self.records.get(index)
    }

    /// Returns records in display order.
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.records.iter()
    }

    /// Appends `record` at the end. No capacity bound, no uniqueness check.
    pub fn append(&mut self, record: ProjectRecord) {
        self.records.push(record);
    }

    /// Merges `patch` into the record at `index`.
    ///
    /// Returns `false` without touching the catalog when `index` is out of
    /// range.
    pub fn replace(&mut self, index: usize, patch: ProjectPatch) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                record.apply(patch);
                true
            }
            None => false,
        }
    }

    pub fn into_records(self) -> Vec<ProjectRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<ProjectRecord> for Catalog {
    fn from_iter<T: IntoIterator<Item = ProjectRecord>>(iter: T) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

/// Converts a caller-supplied signed index into a catalog position.
///
/// Negative values map to `None`, which callers treat as out of range.
pub fn index_from_signed(index: i64) -> Option<usize> {
    usize::try_from(index).ok()
}
