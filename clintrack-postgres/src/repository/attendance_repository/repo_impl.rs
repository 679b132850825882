use async_trait::async_trait;
use chrono::{DateTime, Utc};
use clintrack_db::{AttendanceFilter, AttendanceStore, SessionDurationTotals, StaffAttendanceModel};
use crate::utils::{get_optional_heapless_string, TryFromRow};
use postgres_unit_of_work::Executor;
use sqlx::{postgres::PgRow, Postgres, QueryBuilder, Row};
use std::error::Error;
use uuid::Uuid;

pub struct AttendanceRepositoryImpl {
    pub executor: Executor,
}

impl AttendanceRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

pub(crate) fn push_attendance_filter(
    builder: &mut QueryBuilder<'_, Postgres>,
    filter: &AttendanceFilter,
) {
    builder.push(" WHERE TRUE");
    if let Some(staff_id) = filter.staff_id {
        builder.push(" AND a.staff_id = ").push_bind(staff_id);
    }
    if let Some(since) = filter.login_since {
        builder.push(" AND a.login_time >= ").push_bind(since);
    }
}

#[async_trait]
impl AttendanceStore for AttendanceRepositoryImpl {
    async fn find_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<StaffAttendanceModel>, Box<dyn Error + Send + Sync>> {
        Self::find_attendance_impl(self, filter).await
    }

    async fn login_counts_by_staff(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<(Uuid, i64)>, Box<dyn Error + Send + Sync>> {
        Self::login_counts_by_staff_impl(self, filter).await
    }

    async fn session_duration_totals(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<SessionDurationTotals, Box<dyn Error + Send + Sync>> {
        Self::session_duration_totals_impl(self, filter).await
    }

    async fn record_login(
        &self,
        attendance: StaffAttendanceModel,
    ) -> Result<StaffAttendanceModel, Box<dyn Error + Send + Sync>> {
        Self::record_login_impl(self, attendance).await
    }

    async fn close_latest_session(
        &self,
        staff_id: Uuid,
        logout_time: DateTime<Utc>,
    ) -> Result<Option<StaffAttendanceModel>, Box<dyn Error + Send + Sync>> {
        Self::close_latest_session_impl(self, staff_id, logout_time).await
    }
}

impl TryFromRow<PgRow> for StaffAttendanceModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(StaffAttendanceModel {
            id: row.try_get("id")?,
            staff_id: row.try_get("staff_id")?,
            login_time: row.try_get("login_time")?,
            logout_time: row.try_get("logout_time")?,
            location: get_optional_heapless_string(row, "location")?,
            ip_address: get_optional_heapless_string(row, "ip_address")?,
        })
    }
}
