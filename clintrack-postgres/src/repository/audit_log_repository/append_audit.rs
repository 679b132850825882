use clintrack_db::AuditLogModel;
use crate::utils::log_query_error;
use std::error::Error;

use super::repo_impl::AuditLogRepositoryImpl;

impl AuditLogRepositoryImpl {
    pub(super) async fn append_audit_impl(
        repo: &AuditLogRepositoryImpl,
        entry: AuditLogModel,
    ) -> Result<AuditLogModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO audit_log
                (id, user_id, action, model_name, object_id, changes, ip_address, timestamp)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(entry.id)
        .bind(entry.user_id)
        .bind(entry.action)
        .bind(entry.model_name.as_str())
        .bind(entry.object_id.as_str())
        .bind(entry.changes.clone())
        .bind(entry.ip_address.as_ref().map(|ip| ip.as_str()))
        .bind(entry.timestamp);

        {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query
                .execute(&mut **transaction)
                .await
                .map_err(log_query_error("append_audit"))?;
        }

        Ok(entry)
    }
}
