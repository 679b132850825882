use chrono::{DateTime, Utc};
use clintrack_db::StaffAttendanceModel;
use crate::utils::{log_query_error, TryFromRow};
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::AttendanceRepositoryImpl;

impl AttendanceRepositoryImpl {
    pub(super) async fn close_latest_session_impl(
        repo: &AttendanceRepositoryImpl,
        staff_id: Uuid,
        logout_time: DateTime<Utc>,
    ) -> Result<Option<StaffAttendanceModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            UPDATE staff_attendance
            SET logout_time = $2
            WHERE id = (
                SELECT id FROM staff_attendance
                WHERE staff_id = $1 AND logout_time IS NULL
                ORDER BY login_time DESC
                LIMIT 1
            )
            RETURNING *
            "#,
        )
        .bind(staff_id)
        .bind(logout_time);

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query
                .fetch_optional(&mut **transaction)
                .await
                .map_err(log_query_error("close_latest_session"))?
        };

        row.as_ref().map(StaffAttendanceModel::try_from_row).transpose()
    }
}
