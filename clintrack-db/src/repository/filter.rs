//! Filter values passed to the store traits.
//!
//! Every field is optional; an unset field (or an empty list) places no
//! restriction. Set fields are combined with AND. The `matches` methods define
//! the reference semantics that every store implementation must agree with.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    ParticipantModel, ParticipantStatus, StaffAttendanceModel, StudyModel, SusarModel,
    SusarOutcome, SusarSeverity,
};

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantFilter {
    pub study_id: Option<Uuid>,
    pub statuses: Vec<ParticipantStatus>,
    pub created_by: Option<Uuid>,
    pub created_since: Option<DateTime<Utc>>,
    pub created_on: Option<NaiveDate>,
    /// Participants without an enrollment date never match a set range
    pub enrolled: Option<DateRange>,
}

impl ParticipantFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn in_study(mut self, study_id: Option<Uuid>) -> Self {
        self.study_id = study_id;
        self
    }

    pub fn with_status(mut self, status: ParticipantStatus) -> Self {
        self.statuses.push(status);
        self
    }

    pub fn created_by(mut self, user_id: Uuid) -> Self {
        self.created_by = Some(user_id);
        self
    }

    pub fn created_since(mut self, since: DateTime<Utc>) -> Self {
        self.created_since = Some(since);
        self
    }

    pub fn created_on(mut self, date: NaiveDate) -> Self {
        self.created_on = Some(date);
        self
    }

    pub fn enrolled_within(mut self, range: DateRange) -> Self {
        self.enrolled = Some(range);
        self
    }

    pub fn matches(&self, participant: &ParticipantModel) -> bool {
        if self.study_id.is_some_and(|id| id != participant.study_id) {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&participant.status) {
            return false;
        }
        if self.created_by.is_some() && self.created_by != participant.created_by {
            return false;
        }
        if self.created_since.is_some_and(|since| participant.created_at < since) {
            return false;
        }
        if self.created_on.is_some_and(|date| participant.created_at.date_naive() != date) {
            return false;
        }
        if let Some(range) = self.enrolled {
            match participant.enrollment_date {
                Some(date) if range.contains(date) => {}
                _ => return false,
            }
        }
        true
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudyFilter {
    pub study_id: Option<Uuid>,
    pub is_active: Option<bool>,
}

impl StudyFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn only(mut self, study_id: Option<Uuid>) -> Self {
        self.study_id = study_id;
        self
    }

    pub fn active(mut self) -> Self {
        self.is_active = Some(true);
        self
    }

    pub fn matches(&self, study: &StudyModel) -> bool {
        if self.study_id.is_some_and(|id| id != study.id) {
            return false;
        }
        if self.is_active.is_some_and(|active| active != study.is_active) {
            return false;
        }
        true
    }
}

/// Ordering for SUSAR listings. Both orders are newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SusarSort {
    #[default]
    CreatedDesc,
    OnsetDesc,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SusarFilter {
    /// Study of the SUSAR's participant
    pub study_id: Option<Uuid>,
    pub severities: Vec<SusarSeverity>,
    pub outcomes: Vec<SusarOutcome>,
    pub follow_up_required: Option<bool>,
    pub created_since: Option<DateTime<Utc>>,
    pub detected_on: Option<NaiveDate>,
    pub onset: Option<DateRange>,
    pub sort: SusarSort,
}

impl SusarFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn in_study(mut self, study_id: Option<Uuid>) -> Self {
        self.study_id = study_id;
        self
    }

    pub fn with_severities(mut self, severities: &[SusarSeverity]) -> Self {
        self.severities.extend_from_slice(severities);
        self
    }

    pub fn with_outcomes(mut self, outcomes: &[SusarOutcome]) -> Self {
        self.outcomes.extend_from_slice(outcomes);
        self
    }

    pub fn follow_up_required(mut self) -> Self {
        self.follow_up_required = Some(true);
        self
    }

    pub fn created_since(mut self, since: DateTime<Utc>) -> Self {
        self.created_since = Some(since);
        self
    }

    pub fn detected_on(mut self, date: NaiveDate) -> Self {
        self.detected_on = Some(date);
        self
    }

    pub fn onset_within(mut self, range: DateRange) -> Self {
        self.onset = Some(range);
        self
    }

    pub fn sorted(mut self, sort: SusarSort) -> Self {
        self.sort = sort;
        self
    }

    /// `participant_study_id` is the study of the SUSAR's participant,
    /// which the SUSAR row itself does not carry.
    pub fn matches(&self, susar: &SusarModel, participant_study_id: Option<Uuid>) -> bool {
        if self.study_id.is_some() && self.study_id != participant_study_id {
            return false;
        }
        if !self.severities.is_empty() && !self.severities.contains(&susar.severity) {
            return false;
        }
        if !self.outcomes.is_empty() && !self.outcomes.contains(&susar.outcome) {
            return false;
        }
        if self.follow_up_required.is_some_and(|required| required != susar.follow_up_required) {
            return false;
        }
        if self.created_since.is_some_and(|since| susar.created_at < since) {
            return false;
        }
        if self.detected_on.is_some_and(|date| susar.detection_date.date_naive() != date) {
            return false;
        }
        if self.onset.is_some_and(|range| !range.contains(susar.onset_date.date_naive())) {
            return false;
        }
        true
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    pub staff_id: Option<Uuid>,
    pub login_since: Option<DateTime<Utc>>,
}

impl AttendanceFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_staff(mut self, staff_id: Uuid) -> Self {
        self.staff_id = Some(staff_id);
        self
    }

    pub fn login_since(mut self, since: DateTime<Utc>) -> Self {
        self.login_since = Some(since);
        self
    }

    pub fn matches(&self, attendance: &StaffAttendanceModel) -> bool {
        if self.staff_id.is_some_and(|id| id != attendance.staff_id) {
            return false;
        }
        if self.login_since.is_some_and(|since| attendance.login_time < since) {
            return false;
        }
        true
    }
}
