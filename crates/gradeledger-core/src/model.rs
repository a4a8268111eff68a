//! Core data model types for gradeledger.
//!
//! These are the fundamental types the entire system uses to represent
//! students, their derived performance metrics, and caller identities.

use serde::{Deserialize, Serialize};
use std::fmt;

use chrono::{DateTime, Utc};

/// Identifier of a tracked student. Valid ids are strictly positive.
pub type StudentId = u32;

/// Maximum length of a student name, in characters.
pub const MAX_NAME_LEN: usize = 100;
/// Maximum value of a single grade.
pub const MAX_GRADE: u8 = 100;
/// Maximum attendance percentage.
pub const MAX_ATTENDANCE_PCT: u8 = 100;
/// Maximum study hours per week (24 * 7).
pub const MAX_STUDY_HOURS: u8 = 168;
/// Maximum number of grades accepted in a single bulk append.
pub const MAX_GRADE_BATCH: usize = 50;
/// Maximum page size for id listings.
pub const MAX_PAGE_LIMIT: usize = 100;

/// Identity of a caller (mutator or record creator).
///
/// The empty string is the null identity and is never a valid
/// authorization target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub String);

impl ActorId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Whether this is the null identity.
    pub fn is_null(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ActorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A tracked student record.
///
/// Records are owned exclusively by the store; reads hand out clones, so
/// holding a `Student` never aliases live store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier, immutable after registration.
    pub id: StudentId,
    /// Display name, 1–100 characters.
    pub name: String,
    /// Append-only grade history, each in [0,100].
    pub grades: Vec<u8>,
    /// Attendance percentage in [0,100].
    pub attendance_pct: u8,
    /// Study hours per week in [0,168].
    pub study_hours: u8,
    /// Last explicitly computed prediction, in [0,100]. Zero until the
    /// first `predict` call; grade appends alone never move it.
    pub predicted_score: u8,
    /// False means soft-deleted: the record behaves as "not found" to
    /// every existence-gated operation.
    pub active: bool,
    /// Identity that registered this record, kept for audit.
    pub registered_by: ActorId,
    /// Registration timestamp, immutable.
    pub created_at: DateTime<Utc>,
}

/// Performance category derived from a predicted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl Category {
    /// Stable numeric code, usable by external layers that store the
    /// category as a raw integer.
    pub fn code(self) -> u8 {
        match self {
            Category::Excellent => 0,
            Category::Good => 1,
            Category::Average => 2,
            Category::NeedsImprovement => 3,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Excellent => "Excellent",
            Category::Good => "Good",
            Category::Average => "Average",
            Category::NeedsImprovement => "Needs Improvement",
        }
    }

    /// Confidence score tied one-to-one to the category.
    pub fn confidence(self) -> u8 {
        match self {
            Category::Excellent => 90,
            Category::Good => 85,
            Category::Average => 80,
            Category::NeedsImprovement => 75,
        }
    }

    /// Reverse of [`Category::code`]. Unrecognized codes yield `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Category::Excellent),
            1 => Some(Category::Good),
            2 => Some(Category::Average),
            3 => Some(Category::NeedsImprovement),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived aggregate metrics for one student.
///
/// Created lazily on the first grade append or the first prediction, then
/// updated in place. Never deleted — a deactivated or re-registered id
/// keeps its last computed row until something recomputes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Integer-floor mean of the grade history.
    pub average_grade: u8,
    /// Growth between the first and second half of the grade history,
    /// in [0,100]. Decline and insufficient data both read as zero.
    pub improvement_rate: u8,
    /// `None` until the first explicit prediction.
    pub category: Option<Category>,
    /// Confidence in {90, 85, 80, 75}; zero until the first prediction.
    pub confidence_score: u8,
    /// Timestamp of the most recent recomputation.
    pub last_updated: DateTime<Utc>,
}

impl Default for PerformanceMetrics {
    fn default() -> Self {
        Self {
            average_grade: 0,
            improvement_rate: 0,
            category: None,
            confidence_score: 0,
            last_updated: DateTime::UNIX_EPOCH,
        }
    }
}
