use chrono::{DateTime, NaiveDate, Utc};
use clintrack_api::ParticipantSummary;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::common_enums::{Gender, ParticipantStatus};
use crate::models::identifiable::Identifiable;

/// # Documentation
/// A person enrolled (or being screened) in exactly one study.
/// `status` is freely editable; nothing constrains the order of transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantModel {
    pub id: Uuid,

    /// Human facing participant identifier, unique across all studies
    pub participant_code: HeaplessString<50>,

    pub study_id: Uuid,
    pub first_name: HeaplessString<100>,
    pub last_name: HeaplessString<100>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,

    /// Village, estate or area
    pub location: HeaplessString<200>,
    pub county: Option<HeaplessString<100>>,

    pub status: ParticipantStatus,
    pub enrollment_date: Option<NaiveDate>,

    /// User who registered the participant, if still present
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ParticipantModel {
    /// List row without personal or contact details
    pub fn summary(&self) -> ParticipantSummary {
        ParticipantSummary {
            id: self.id,
            participant_code: self.participant_code.to_string(),
            study_id: self.study_id,
            status: self.status.as_str().to_string(),
            enrollment_date: self.enrollment_date,
            created_at: self.created_at,
        }
    }
}

impl Identifiable for ParticipantModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
