use chrono::{DateTime, NaiveDate, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// # Documentation
/// A clinical study. Owns its participants; a study that still has
/// participants cannot be deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyModel {
    pub id: Uuid,
    pub code: HeaplessString<50>,
    pub name: HeaplessString<200>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl StudyModel {
    /// Planned duration in days, when both dates are set
    pub fn duration_days(&self) -> Option<i64> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }
}

impl Identifiable for StudyModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
