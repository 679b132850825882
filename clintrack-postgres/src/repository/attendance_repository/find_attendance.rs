use clintrack_db::{AttendanceFilter, StaffAttendanceModel};
use crate::utils::{log_query_error, rows_into};
use sqlx::QueryBuilder;
use std::error::Error;

use super::repo_impl::{push_attendance_filter, AttendanceRepositoryImpl};

impl AttendanceRepositoryImpl {
    pub(super) async fn find_attendance_impl(
        repo: &AttendanceRepositoryImpl,
        filter: &AttendanceFilter,
    ) -> Result<Vec<StaffAttendanceModel>, Box<dyn Error + Send + Sync>> {
        let mut builder = QueryBuilder::new("SELECT a.* FROM staff_attendance a");
        push_attendance_filter(&mut builder, filter);
        builder.push(" ORDER BY a.login_time DESC, a.id");

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder
                .build()
                .fetch_all(&mut **transaction)
                .await
                .map_err(log_query_error("find_attendance"))?
        };

        rows_into(rows)
    }
}
