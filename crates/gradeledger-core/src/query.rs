//! Read-only query layer over the record store.
//!
//! Queries need no authorization and return owned snapshots, never
//! references into live store state.

use crate::error::LedgerError;
use crate::model::{Category, PerformanceMetrics, Student, StudentId, MAX_PAGE_LIMIT};
use crate::store::RecordStore;

/// Read-only accessors layered over a borrowed store.
pub struct Queries<'a> {
    store: &'a RecordStore,
}

impl RecordStore {
    /// Read-only view of this store.
    pub fn queries(&self) -> Queries<'_> {
        Queries { store: self }
    }
}

impl Queries<'_> {
    /// Full snapshot of an active record. Absent and soft-deleted ids
    /// answer identically with `NotFound`.
    pub fn get(&self, id: StudentId) -> Result<Student, LedgerError> {
        self.store
            .students
            .get(&id)
            .filter(|s| s.active)
            .cloned()
            .ok_or(LedgerError::NotFound(id))
    }

    /// Metrics snapshot for an active record. A record whose metrics were
    /// never computed answers with the all-zero default row.
    pub fn metrics(&self, id: StudentId) -> Result<PerformanceMetrics, LedgerError> {
        if !self.store.students.get(&id).is_some_and(|s| s.active) {
            return Err(LedgerError::NotFound(id));
        }
        Ok(self.store.metrics.get(&id).cloned().unwrap_or_default())
    }

    /// Length of the enumeration sequence.
    ///
    /// Naming trap: this counts every registration ever performed —
    /// deactivated ids included, re-registered ids twice — not the number
    /// of currently active students.
    pub fn count(&self) -> usize {
        self.store.student_ids.len()
    }

    /// Page of ids from the enumeration sequence, in registration order.
    /// May include inactive ids.
    pub fn list_ids(&self, offset: usize, limit: usize) -> Result<Vec<StudentId>, LedgerError> {
        if limit == 0 || limit > MAX_PAGE_LIMIT {
            return Err(LedgerError::InvalidLimit(limit));
        }
        let total = self.store.student_ids.len();
        if offset >= total {
            return Err(LedgerError::OffsetOutOfBounds { offset, total });
        }
        let end = (offset + limit).min(total);
        Ok(self.store.student_ids[offset..end].to_vec())
    }
}

/// Label for a raw category code. Unrecognized codes map to `"Unknown"`
/// rather than failing.
pub fn category_label(code: u8) -> &'static str {
    Category::from_code(code).map_or("Unknown", Category::label)
}
