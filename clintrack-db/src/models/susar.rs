use chrono::{DateTime, NaiveDate, Utc};
use clintrack_api::SusarSummary;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::common_enums::{SusarOutcome, SusarSeverity};
use crate::models::identifiable::Identifiable;

/// # Documentation
/// Suspected Unexpected Serious Adverse Reaction reported for one participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SusarModel {
    pub id: Uuid,
    pub susar_code: HeaplessString<50>,
    pub participant_id: Uuid,
    pub event_description: String,
    pub onset_date: DateTime<Utc>,
    pub detection_date: DateTime<Utc>,
    pub severity: SusarSeverity,
    pub outcome: SusarOutcome,
    pub is_related_to_study: bool,
    pub hospitalization_required: bool,

    pub reported_to_irb: bool,
    pub irb_report_date: Option<NaiveDate>,
    pub reported_to_sponsor: bool,
    pub sponsor_report_date: Option<NaiveDate>,

    pub follow_up_required: bool,
    pub follow_up_notes: Option<String>,

    pub reported_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl SusarModel {
    /// Follow-up notes count only when they contain something other than whitespace
    pub fn has_follow_up_notes(&self) -> bool {
        self.follow_up_notes
            .as_deref()
            .is_some_and(|notes| !notes.trim().is_empty())
    }

    pub fn summary(&self) -> SusarSummary {
        SusarSummary {
            id: self.id,
            susar_code: self.susar_code.to_string(),
            participant_id: self.participant_id,
            severity: self.severity.as_str().to_string(),
            outcome: self.outcome.as_str().to_string(),
            onset_date: self.onset_date,
            follow_up_required: self.follow_up_required,
        }
    }
}

impl Identifiable for SusarModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
