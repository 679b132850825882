use clintrack_db::AttendanceFilter;
use crate::utils::log_query_error;
use sqlx::{QueryBuilder, Row};
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{push_attendance_filter, AttendanceRepositoryImpl};

impl AttendanceRepositoryImpl {
    pub(super) async fn login_counts_by_staff_impl(
        repo: &AttendanceRepositoryImpl,
        filter: &AttendanceFilter,
    ) -> Result<Vec<(Uuid, i64)>, Box<dyn Error + Send + Sync>> {
        let mut builder =
            QueryBuilder::new("SELECT a.staff_id, COUNT(*) AS login_count FROM staff_attendance a");
        push_attendance_filter(&mut builder, filter);
        builder.push(" GROUP BY a.staff_id");

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder
                .build()
                .fetch_all(&mut **transaction)
                .await
                .map_err(log_query_error("login_counts_by_staff"))?
        };

        let mut counts = Vec::with_capacity(rows.len());
        for row in rows {
            counts.push((row.try_get("staff_id")?, row.try_get("login_count")?));
        }
        Ok(counts)
    }
}
