//! The student record store.
//!
//! A keyed table of student records plus their derived metrics, guarded by
//! the authorization registry and observed through an audit sink. All
//! mutating methods validate fully before touching state, so a failed call
//! never leaves partial effects.
//!
//! Mutations take `&mut self`, which serializes them in-process; callers
//! sharing a store across threads wrap it in a `Mutex`.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::audit::{AuditEvent, AuditOperation, AuditSink, NoopSink};
use crate::auth::AuthRegistry;
use crate::error::LedgerError;
use crate::metrics::{average_grade, improvement_rate, Prediction};
use crate::model::{
    ActorId, PerformanceMetrics, Student, StudentId, MAX_ATTENDANCE_PCT, MAX_GRADE,
    MAX_GRADE_BATCH, MAX_NAME_LEN, MAX_STUDY_HOURS,
};

fn default_sink() -> Arc<dyn AuditSink> {
    Arc::new(NoopSink)
}

/// Keyed store of student records and derived metrics.
///
/// The store exclusively owns all `Student` and `PerformanceMetrics`
/// entities; reads return clones, never references into live state.
#[derive(Serialize, Deserialize)]
pub struct RecordStore {
    pub(crate) auth: AuthRegistry,
    pub(crate) students: HashMap<StudentId, Student>,
    pub(crate) metrics: HashMap<StudentId, PerformanceMetrics>,
    /// Append-only enumeration of every id ever registered, in
    /// registration order. Authoritative for pagination; includes
    /// deactivated ids and repeats re-registered ones.
    pub(crate) student_ids: Vec<StudentId>,
    #[serde(skip, default = "default_sink")]
    sink: Arc<dyn AuditSink>,
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("auth", &self.auth)
            .field("students", &self.students)
            .field("metrics", &self.metrics)
            .field("student_ids", &self.student_ids)
            .finish()
    }
}

impl RecordStore {
    /// Create an empty store owned by `owner`, with a no-op audit sink.
    pub fn new(owner: ActorId) -> Self {
        Self::with_sink(owner, default_sink())
    }

    /// Create an empty store that emits audit events to `sink`.
    pub fn with_sink(owner: ActorId, sink: Arc<dyn AuditSink>) -> Self {
        Self {
            auth: AuthRegistry::new(owner),
            students: HashMap::new(),
            metrics: HashMap::new(),
            student_ids: Vec::new(),
            sink,
        }
    }

    /// Replace the audit sink (e.g. after loading a snapshot, which
    /// restores with a no-op sink).
    pub fn set_sink(&mut self, sink: Arc<dyn AuditSink>) {
        self.sink = sink;
    }

    pub fn owner(&self) -> &ActorId {
        self.auth.owner()
    }

    pub fn auth(&self) -> &AuthRegistry {
        &self.auth
    }

    fn emit(&self, operation: AuditOperation, student: Option<StudentId>, actor: &ActorId) {
        self.sink
            .record(&AuditEvent::new(operation, student, actor.clone()));
    }

    /// Borrow the active record for `id`, or `NotFound` if it is absent
    /// or soft-deleted.
    fn active(&self, id: StudentId) -> Result<&Student, LedgerError> {
        self.students
            .get(&id)
            .filter(|s| s.active)
            .ok_or(LedgerError::NotFound(id))
    }

    fn active_mut(&mut self, id: StudentId) -> Result<&mut Student, LedgerError> {
        self.students
            .get_mut(&id)
            .filter(|s| s.active)
            .ok_or(LedgerError::NotFound(id))
    }

    // -----------------------------------------------------------------
    // Authorization operations
    // -----------------------------------------------------------------

    /// Grant `target` mutation rights. Owner-only.
    pub fn authorize(&mut self, caller: &ActorId, target: &ActorId) -> Result<(), LedgerError> {
        self.auth.authorize(caller, target)?;
        self.emit(
            AuditOperation::Authorized {
                target: target.clone(),
            },
            None,
            caller,
        );
        Ok(())
    }

    /// Revoke `target`'s mutation rights. Owner-only.
    pub fn deauthorize(&mut self, caller: &ActorId, target: &ActorId) -> Result<(), LedgerError> {
        self.auth.deauthorize(caller, target)?;
        self.emit(
            AuditOperation::Deauthorized {
                target: target.clone(),
            },
            None,
            caller,
        );
        Ok(())
    }

    // -----------------------------------------------------------------
    // Record lifecycle
    // -----------------------------------------------------------------

    /// Register a new student record.
    ///
    /// Fails with `AlreadyExists` only while an *active* record holds the
    /// id: re-registering a deactivated id is allowed and overwrites the
    /// prior record (grades reset to empty; any stale metrics row is left
    /// in place until recomputed). The id is appended to the enumeration
    /// sequence on every successful registration.
    pub fn register(
        &mut self,
        caller: &ActorId,
        id: StudentId,
        name: &str,
        attendance_pct: u8,
        study_hours: u8,
    ) -> Result<(), LedgerError> {
        self.auth.require_authorized(caller)?;
        if id == 0 {
            return Err(LedgerError::InvalidId);
        }
        let name_len = name.chars().count();
        if name_len == 0 || name_len > MAX_NAME_LEN {
            return Err(LedgerError::InvalidName);
        }
        if attendance_pct > MAX_ATTENDANCE_PCT {
            return Err(LedgerError::InvalidPercentage(attendance_pct));
        }
        if study_hours > MAX_STUDY_HOURS {
            return Err(LedgerError::InvalidStudyHours(study_hours));
        }
        if self.students.get(&id).is_some_and(|s| s.active) {
            return Err(LedgerError::AlreadyExists(id));
        }

        self.students.insert(
            id,
            Student {
                id,
                name: name.to_string(),
                grades: Vec::new(),
                attendance_pct,
                study_hours,
                predicted_score: 0,
                active: true,
                registered_by: caller.clone(),
                created_at: Utc::now(),
            },
        );
        self.student_ids.push(id);
        self.emit(AuditOperation::Registered, Some(id), caller);
        Ok(())
    }

    /// Append a single grade and recompute the aggregate metrics.
    pub fn add_grade(
        &mut self,
        caller: &ActorId,
        id: StudentId,
        grade: u8,
    ) -> Result<(), LedgerError> {
        self.append_grades(caller, id, &[grade], false)
    }

    /// Append a batch of 1–50 grades atomically.
    ///
    /// Every entry is validated before any is appended; the aggregate
    /// metrics are recomputed once for the whole batch, then one
    /// grade-added event is emitted per grade in input order.
    pub fn add_grades(
        &mut self,
        caller: &ActorId,
        id: StudentId,
        grades: &[u8],
    ) -> Result<(), LedgerError> {
        self.append_grades(caller, id, grades, true)
    }

    fn append_grades(
        &mut self,
        caller: &ActorId,
        id: StudentId,
        grades: &[u8],
        bounded_batch: bool,
    ) -> Result<(), LedgerError> {
        self.auth.require_authorized(caller)?;
        self.active(id)?;
        if bounded_batch && (grades.is_empty() || grades.len() > MAX_GRADE_BATCH) {
            return Err(LedgerError::InvalidBatchSize(grades.len()));
        }
        if let Some(&bad) = grades.iter().find(|&&g| g > MAX_GRADE) {
            return Err(LedgerError::InvalidGrade(bad));
        }

        let student = self.active_mut(id)?;
        student.grades.extend_from_slice(grades);
        let history = student.grades.clone();
        self.recompute_aggregate(id, &history);

        for &grade in grades {
            self.emit(AuditOperation::GradeAdded { grade }, Some(id), caller);
        }
        Ok(())
    }

    /// Update a grade history's aggregate row: average, improvement rate,
    /// and timestamp. Never touches predicted score, category, or
    /// confidence — those move only through [`RecordStore::predict`].
    fn recompute_aggregate(&mut self, id: StudentId, grades: &[u8]) {
        if grades.is_empty() {
            return;
        }
        let entry = self.metrics.entry(id).or_default();
        entry.average_grade = average_grade(grades);
        entry.improvement_rate = improvement_rate(grades);
        entry.last_updated = Utc::now();
    }

    /// Overwrite the attendance percentage. Deliberately does NOT
    /// recompute metrics: a changed attendance is invisible to queries
    /// until the next explicit prediction.
    pub fn update_attendance(
        &mut self,
        caller: &ActorId,
        id: StudentId,
        pct: u8,
    ) -> Result<(), LedgerError> {
        self.auth.require_authorized(caller)?;
        self.active(id)?;
        if pct > MAX_ATTENDANCE_PCT {
            return Err(LedgerError::InvalidPercentage(pct));
        }
        self.active_mut(id)?.attendance_pct = pct;
        self.emit(AuditOperation::AttendanceUpdated { pct }, Some(id), caller);
        Ok(())
    }

    /// Overwrite the weekly study hours. No event, no recomputation —
    /// the original contract is silent here and we preserve that.
    pub fn update_study_hours(
        &mut self,
        caller: &ActorId,
        id: StudentId,
        hours: u8,
    ) -> Result<(), LedgerError> {
        self.auth.require_authorized(caller)?;
        self.active(id)?;
        if hours > MAX_STUDY_HOURS {
            return Err(LedgerError::InvalidStudyHours(hours));
        }
        self.active_mut(id)?.study_hours = hours;
        Ok(())
    }

    /// Soft-delete the record. One-way: no operation reactivates an id,
    /// though the id itself may be re-registered from scratch.
    pub fn deactivate(&mut self, caller: &ActorId, id: StudentId) -> Result<(), LedgerError> {
        self.auth.require_authorized(caller)?;
        self.active_mut(id)?.active = false;
        self.emit(AuditOperation::Deactivated, Some(id), caller);
        Ok(())
    }

    // -----------------------------------------------------------------
    // Prediction
    // -----------------------------------------------------------------

    /// Run the deterministic prediction over the current grades,
    /// attendance, and study hours, writing the score onto the record and
    /// the full metrics row. Idempotent given unchanged inputs.
    pub fn predict(&mut self, caller: &ActorId, id: StudentId) -> Result<Prediction, LedgerError> {
        self.auth.require_authorized(caller)?;
        let student = self.active(id)?;
        if student.grades.is_empty() {
            return Err(LedgerError::NoGradesAvailable(id));
        }

        let prediction =
            Prediction::compute(&student.grades, student.attendance_pct, student.study_hours);
        let rate = improvement_rate(&student.grades);
        let average = average_grade(&student.grades);

        self.active_mut(id)?.predicted_score = prediction.score;
        let entry = self.metrics.entry(id).or_default();
        entry.average_grade = average;
        entry.improvement_rate = rate;
        entry.category = Some(prediction.category);
        entry.confidence_score = prediction.confidence;
        entry.last_updated = Utc::now();

        self.emit(
            AuditOperation::Predicted {
                score: prediction.score,
            },
            Some(id),
            caller,
        );
        Ok(prediction)
    }

    // -----------------------------------------------------------------
    // JSON snapshot persistence
    // -----------------------------------------------------------------

    /// Save the store as a JSON snapshot. The audit sink is not part of
    /// the snapshot.
    pub fn save_json(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize ledger")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write ledger to {}", path.display()))?;
        Ok(())
    }

    /// Load a store from a JSON snapshot. The restored store has a no-op
    /// audit sink; call [`RecordStore::set_sink`] to reattach one.
    pub fn load_json(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ledger from {}", path.display()))?;
        let store: RecordStore =
            serde_json::from_str(&content).context("failed to parse ledger JSON")?;
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MemorySink;
    use crate::model::Category;

    const OWNER: &str = "owner";

    fn owner() -> ActorId {
        OWNER.into()
    }

    fn store() -> RecordStore {
        RecordStore::new(owner())
    }

    fn store_with_memory_sink() -> (RecordStore, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let store = RecordStore::with_sink(owner(), sink.clone());
        (store, sink)
    }

    fn register_default(store: &mut RecordStore, id: StudentId) {
        store.register(&owner(), id, "Avery Lee", 90, 20).unwrap();
    }

    // -- registration ---------------------------------------------------

    #[test]
    fn register_and_query_roundtrip() {
        let mut s = store();
        register_default(&mut s, 1);
        let student = s.queries().get(1).unwrap();
        assert_eq!(student.name, "Avery Lee");
        assert!(student.grades.is_empty());
        assert_eq!(student.predicted_score, 0);
        assert!(student.active);
        assert_eq!(student.registered_by, owner());
    }

    #[test]
    fn register_validation_errors() {
        let mut s = store();
        assert_eq!(
            s.register(&owner(), 0, "Avery", 90, 20),
            Err(LedgerError::InvalidId)
        );
        assert_eq!(
            s.register(&owner(), 1, "", 90, 20),
            Err(LedgerError::InvalidName)
        );
        assert_eq!(
            s.register(&owner(), 1, &"x".repeat(101), 90, 20),
            Err(LedgerError::InvalidName)
        );
        assert_eq!(
            s.register(&owner(), 1, "Avery", 101, 20),
            Err(LedgerError::InvalidPercentage(101))
        );
        assert_eq!(
            s.register(&owner(), 1, "Avery", 90, 169),
            Err(LedgerError::InvalidStudyHours(169))
        );
        // Nothing was registered by any of the failures.
        assert_eq!(s.queries().count(), 0);
    }

    #[test]
    fn register_duplicate_active_id_fails() {
        let mut s = store();
        register_default(&mut s, 1);
        assert_eq!(
            s.register(&owner(), 1, "Imposter", 50, 10),
            Err(LedgerError::AlreadyExists(1))
        );
    }

    #[test]
    fn register_requires_authorization() {
        let mut s = store();
        assert_eq!(
            s.register(&"stranger".into(), 1, "Avery", 90, 20),
            Err(LedgerError::Unauthorized("stranger".into()))
        );
    }

    #[test]
    fn reregister_after_deactivation_resets_grades() {
        let mut s = store();
        register_default(&mut s, 1);
        s.add_grades(&owner(), 1, &[80, 90]).unwrap();
        s.deactivate(&owner(), 1).unwrap();

        s.register(&owner(), 1, "Avery Lee", 70, 10).unwrap();
        let student = s.queries().get(1).unwrap();
        assert!(student.grades.is_empty());
        assert_eq!(student.attendance_pct, 70);
        // The enumeration sequence records both registrations.
        assert_eq!(s.queries().count(), 2);
        // The stale metrics row survives until the next recomputation.
        let metrics = s.queries().metrics(1).unwrap();
        assert_eq!(metrics.average_grade, 85);
    }

    // -- authorization delegation --------------------------------------

    #[test]
    fn authorized_actor_can_mutate() {
        let mut s = store();
        s.authorize(&owner(), &"alice".into()).unwrap();
        s.register(&"alice".into(), 1, "Avery", 90, 20).unwrap();
        assert_eq!(s.queries().get(1).unwrap().registered_by, "alice".into());
    }

    #[test]
    fn deauthorized_actor_loses_access() {
        let mut s = store();
        s.authorize(&owner(), &"alice".into()).unwrap();
        s.deauthorize(&owner(), &"alice".into()).unwrap();
        assert_eq!(
            s.register(&"alice".into(), 1, "Avery", 90, 20),
            Err(LedgerError::Unauthorized("alice".into()))
        );
    }

    // -- grades ---------------------------------------------------------

    #[test]
    fn add_grade_appends_and_recomputes_aggregate() {
        let mut s = store();
        register_default(&mut s, 1);
        s.add_grade(&owner(), 1, 60).unwrap();
        s.add_grade(&owner(), 1, 70).unwrap();

        let metrics = s.queries().metrics(1).unwrap();
        assert_eq!(metrics.average_grade, 65);
        // Aggregate recompute never touches category or confidence.
        assert_eq!(metrics.category, None);
        assert_eq!(metrics.confidence_score, 0);
    }

    #[test]
    fn grade_append_does_not_move_predicted_score() {
        let mut s = store();
        register_default(&mut s, 1);
        s.add_grades(&owner(), 1, &[60, 70, 80, 90]).unwrap();
        assert_eq!(s.queries().get(1).unwrap().predicted_score, 0);
    }

    #[test]
    fn invalid_grade_rejected() {
        let mut s = store();
        register_default(&mut s, 1);
        assert_eq!(
            s.add_grade(&owner(), 1, 101),
            Err(LedgerError::InvalidGrade(101))
        );
    }

    #[test]
    fn batch_is_atomic_on_invalid_entry() {
        let mut s = store();
        register_default(&mut s, 1);
        s.add_grades(&owner(), 1, &[50, 60]).unwrap();
        let before_metrics = s.queries().metrics(1).unwrap();

        assert_eq!(
            s.add_grades(&owner(), 1, &[70, 101, 80]),
            Err(LedgerError::InvalidGrade(101))
        );

        let student = s.queries().get(1).unwrap();
        assert_eq!(student.grades, vec![50, 60]);
        assert_eq!(s.queries().metrics(1).unwrap(), before_metrics);
    }

    #[test]
    fn batch_size_bounds() {
        let mut s = store();
        register_default(&mut s, 1);
        assert_eq!(
            s.add_grades(&owner(), 1, &[]),
            Err(LedgerError::InvalidBatchSize(0))
        );
        let too_many = vec![50u8; 51];
        assert_eq!(
            s.add_grades(&owner(), 1, &too_many),
            Err(LedgerError::InvalidBatchSize(51))
        );
        let max_batch = vec![50u8; 50];
        assert!(s.add_grades(&owner(), 1, &max_batch).is_ok());
    }

    #[test]
    fn grades_on_missing_or_inactive_record() {
        let mut s = store();
        assert_eq!(s.add_grade(&owner(), 9, 50), Err(LedgerError::NotFound(9)));
        register_default(&mut s, 1);
        s.deactivate(&owner(), 1).unwrap();
        assert_eq!(s.add_grade(&owner(), 1, 50), Err(LedgerError::NotFound(1)));
    }

    // -- attendance / study hours ---------------------------------------

    #[test]
    fn attendance_update_leaves_metrics_stale() {
        let mut s = store();
        register_default(&mut s, 1);
        s.add_grades(&owner(), 1, &[60, 70, 80, 90]).unwrap();
        let prediction = s.predict(&owner(), 1).unwrap();
        assert_eq!(prediction.score, 74);

        // Changing attendance does not move the stored prediction...
        s.update_attendance(&owner(), 1, 0).unwrap();
        assert_eq!(s.queries().get(1).unwrap().predicted_score, 74);

        // ...until predict is called again.
        let updated = s.predict(&owner(), 1).unwrap();
        assert_eq!(updated.score, 47);
        assert_eq!(s.queries().get(1).unwrap().predicted_score, 47);
    }

    #[test]
    fn attendance_validation() {
        let mut s = store();
        register_default(&mut s, 1);
        assert_eq!(
            s.update_attendance(&owner(), 1, 101),
            Err(LedgerError::InvalidPercentage(101))
        );
        s.update_attendance(&owner(), 1, 100).unwrap();
        assert_eq!(s.queries().get(1).unwrap().attendance_pct, 100);
    }

    #[test]
    fn study_hours_validation() {
        let mut s = store();
        register_default(&mut s, 1);
        assert_eq!(
            s.update_study_hours(&owner(), 1, 169),
            Err(LedgerError::InvalidStudyHours(169))
        );
        s.update_study_hours(&owner(), 1, 168).unwrap();
        assert_eq!(s.queries().get(1).unwrap().study_hours, 168);
    }

    // -- deactivation ---------------------------------------------------

    #[test]
    fn deactivated_record_reads_as_not_found() {
        let mut s = store();
        register_default(&mut s, 1);
        s.deactivate(&owner(), 1).unwrap();
        assert_eq!(s.queries().get(1), Err(LedgerError::NotFound(1)));
        assert_eq!(s.queries().metrics(1), Err(LedgerError::NotFound(1)));
        assert_eq!(s.deactivate(&owner(), 1), Err(LedgerError::NotFound(1)));
    }

    // -- prediction -----------------------------------------------------

    #[test]
    fn predict_requires_grades() {
        let mut s = store();
        register_default(&mut s, 1);
        assert_eq!(
            s.predict(&owner(), 1),
            Err(LedgerError::NoGradesAvailable(1))
        );
    }

    #[test]
    fn predict_writes_score_and_full_metrics_row() {
        let mut s = store();
        register_default(&mut s, 1);
        s.add_grades(&owner(), 1, &[60, 70, 80, 90]).unwrap();
        let prediction = s.predict(&owner(), 1).unwrap();

        assert_eq!(prediction.score, 74);
        assert_eq!(prediction.category, Category::Average);
        assert_eq!(prediction.confidence, 80);

        let student = s.queries().get(1).unwrap();
        assert_eq!(student.predicted_score, 74);

        let metrics = s.queries().metrics(1).unwrap();
        assert_eq!(metrics.average_grade, 75);
        assert_eq!(metrics.improvement_rate, 30); // 100*(85-65)/65
        assert_eq!(metrics.category, Some(Category::Average));
        assert_eq!(metrics.confidence_score, 80);
    }

    #[test]
    fn predict_is_idempotent_without_intervening_mutation() {
        let mut s = store();
        register_default(&mut s, 1);
        s.add_grades(&owner(), 1, &[60, 70, 80, 90]).unwrap();
        let first = s.predict(&owner(), 1).unwrap();
        let second = s.predict(&owner(), 1).unwrap();
        assert_eq!(first, second);
        assert_eq!(s.queries().get(1).unwrap().predicted_score, first.score);
    }

    // -- audit events ---------------------------------------------------

    #[test]
    fn mutations_emit_events_in_order() {
        let (mut s, sink) = store_with_memory_sink();
        s.authorize(&owner(), &"alice".into()).unwrap();
        s.register(&"alice".into(), 1, "Avery", 90, 20).unwrap();
        s.add_grades(&"alice".into(), 1, &[60, 70]).unwrap();
        s.update_attendance(&"alice".into(), 1, 95).unwrap();
        s.update_study_hours(&"alice".into(), 1, 30).unwrap(); // silent
        s.predict(&"alice".into(), 1).unwrap();
        s.deactivate(&"alice".into(), 1).unwrap();

        let ops: Vec<&'static str> = sink.events().iter().map(|e| e.operation.name()).collect();
        assert_eq!(
            ops,
            vec![
                "authorize",
                "register",
                "grade_added",
                "grade_added",
                "attendance_updated",
                "predict",
                "deactivate",
            ]
        );
    }

    #[test]
    fn grade_events_preserve_input_order() {
        let (mut s, sink) = store_with_memory_sink();
        register_default(&mut s, 1);
        s.add_grades(&owner(), 1, &[10, 20, 30]).unwrap();

        let grades: Vec<u8> = sink
            .events()
            .iter()
            .filter_map(|e| match e.operation {
                AuditOperation::GradeAdded { grade } => Some(grade),
                _ => None,
            })
            .collect();
        assert_eq!(grades, vec![10, 20, 30]);
    }

    #[test]
    fn failed_mutation_emits_nothing() {
        let (mut s, sink) = store_with_memory_sink();
        assert!(s.register(&owner(), 0, "Avery", 90, 20).is_err());
        assert!(s.add_grade(&owner(), 9, 50).is_err());
        assert!(sink.is_empty());
    }

    // -- persistence ----------------------------------------------------

    #[test]
    fn json_snapshot_roundtrip() {
        let mut s = store();
        register_default(&mut s, 1);
        s.add_grades(&owner(), 1, &[60, 70, 80, 90]).unwrap();
        s.predict(&owner(), 1).unwrap();
        s.authorize(&owner(), &"alice".into()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        s.save_json(&path).unwrap();

        let loaded = RecordStore::load_json(&path).unwrap();
        assert_eq!(loaded.owner(), &owner());
        assert!(loaded.auth().is_authorized(&"alice".into()));
        assert_eq!(loaded.queries().get(1).unwrap(), s.queries().get(1).unwrap());
        assert_eq!(
            loaded.queries().metrics(1).unwrap(),
            s.queries().metrics(1).unwrap()
        );
        assert_eq!(loaded.queries().count(), 1);
    }
}
