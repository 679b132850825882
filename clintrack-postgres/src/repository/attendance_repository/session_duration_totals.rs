use clintrack_db::{AttendanceFilter, SessionDurationTotals};
use crate::utils::log_query_error;
use sqlx::{QueryBuilder, Row};
use std::error::Error;

use super::repo_impl::{push_attendance_filter, AttendanceRepositoryImpl};

impl AttendanceRepositoryImpl {
    /// Durations are summed in the database; open sessions are excluded.
    pub(super) async fn session_duration_totals_impl(
        repo: &AttendanceRepositoryImpl,
        filter: &AttendanceFilter,
    ) -> Result<SessionDurationTotals, Box<dyn Error + Send + Sync>> {
        let mut builder = QueryBuilder::new(
            r#"SELECT COUNT(*) AS closed_sessions,
                COALESCE(
                    SUM(EXTRACT(EPOCH FROM (a.logout_time - a.login_time))), 0
                )::BIGINT AS total_seconds
            FROM staff_attendance a"#,
        );
        push_attendance_filter(&mut builder, filter);
        builder.push(" AND a.logout_time IS NOT NULL");

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder
                .build()
                .fetch_one(&mut **transaction)
                .await
                .map_err(log_query_error("session_duration_totals"))?
        };

        Ok(SessionDurationTotals {
            closed_sessions: row.try_get("closed_sessions")?,
            total_seconds: row.try_get("total_seconds")?,
        })
    }
}
