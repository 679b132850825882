use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::error::Error;
use uuid::Uuid;

use crate::models::StaffAttendanceModel;
use crate::repository::filter::AttendanceFilter;

/// Aggregate of closed sessions, computed by subtracting timestamps in the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionDurationTotals {
    /// Sessions with a logout time
    pub closed_sessions: i64,
    /// Sum of `logout_time - login_time` over those sessions, in seconds
    pub total_seconds: i64,
}

impl SessionDurationTotals {
    /// Fold sessions into totals, skipping open ones
    pub fn from_sessions<'a>(sessions: impl IntoIterator<Item = &'a StaffAttendanceModel>) -> Self {
        sessions
            .into_iter()
            .filter_map(StaffAttendanceModel::duration)
            .fold(Self::default(), |acc, duration| Self {
                closed_sessions: acc.closed_sessions + 1,
                total_seconds: acc.total_seconds + duration.num_seconds(),
            })
    }
}

/// Staff login sessions
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// Sessions matching `filter`, latest login first
    async fn find_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<StaffAttendanceModel>, Box<dyn Error + Send + Sync>>;

    /// Number of sessions per staff member. Order is unspecified.
    async fn login_counts_by_staff(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<(Uuid, i64)>, Box<dyn Error + Send + Sync>>;

    /// Open sessions are skipped, never treated as zero-length.
    async fn session_duration_totals(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<SessionDurationTotals, Box<dyn Error + Send + Sync>>;

    /// Insert a new session row
    async fn record_login(
        &self,
        attendance: StaffAttendanceModel,
    ) -> Result<StaffAttendanceModel, Box<dyn Error + Send + Sync>>;

    /// Close the most recent open session of `staff_id`.
    /// Returns `None` when the user has no open session.
    async fn close_latest_session(
        &self,
        staff_id: Uuid,
        logout_time: DateTime<Utc>,
    ) -> Result<Option<StaffAttendanceModel>, Box<dyn Error + Send + Sync>>;
}
