use async_trait::async_trait;
use clintrack_api::GroupCount;
use std::error::Error;

use crate::models::ParticipantModel;
use crate::repository::filter::ParticipantFilter;
use crate::repository::pagination::PageRequest;

/// Participant column a grouped count can be keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipantField {
    Status,
    Gender,
    Location,
    Study,
}

/// Read access to the participant collection
///
/// Grouped counts are keyed by the stored value of the field: the enum code
/// for status and gender, the raw text for location and the study UUID
/// rendered as a hyphenated string for study. Group order is unspecified.
#[async_trait]
pub trait ParticipantStore: Send + Sync {
    /// Participants matching `filter`, newest `created_at` first
    async fn find_participants(
        &self,
        filter: &ParticipantFilter,
        page: Option<PageRequest>,
    ) -> Result<Vec<ParticipantModel>, Box<dyn Error + Send + Sync>>;

    async fn count_participants(
        &self,
        filter: &ParticipantFilter,
    ) -> Result<i64, Box<dyn Error + Send + Sync>>;

    async fn count_participants_by(
        &self,
        field: ParticipantField,
        filter: &ParticipantFilter,
    ) -> Result<Vec<GroupCount>, Box<dyn Error + Send + Sync>>;
}
