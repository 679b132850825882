use clintrack_db::StaffAttendanceModel;
use crate::utils::log_query_error;
use std::error::Error;

use super::repo_impl::AttendanceRepositoryImpl;

impl AttendanceRepositoryImpl {
    pub(super) async fn record_login_impl(
        repo: &AttendanceRepositoryImpl,
        attendance: StaffAttendanceModel,
    ) -> Result<StaffAttendanceModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO staff_attendance
                (id, staff_id, login_time, logout_time, location, ip_address)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(attendance.id)
        .bind(attendance.staff_id)
        .bind(attendance.login_time)
        .bind(attendance.logout_time)
        .bind(attendance.location.as_ref().map(|l| l.as_str()))
        .bind(attendance.ip_address.as_ref().map(|ip| ip.as_str()));

        {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query
                .execute(&mut **transaction)
                .await
                .map_err(log_query_error("record_login"))?;
        }

        Ok(attendance)
    }
}
