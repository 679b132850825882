use clintrack_db::{AuditLogModel, PageRequest};
use crate::utils::{log_query_error, push_page, rows_into};
use sqlx::QueryBuilder;
use std::error::Error;

use super::repo_impl::AuditLogRepositoryImpl;

impl AuditLogRepositoryImpl {
    pub(super) async fn find_audit_entries_impl(
        repo: &AuditLogRepositoryImpl,
        page: PageRequest,
    ) -> Result<Vec<AuditLogModel>, Box<dyn Error + Send + Sync>> {
        let mut builder = QueryBuilder::new("SELECT l.* FROM audit_log l");
        builder.push(" ORDER BY l.timestamp DESC, l.id");
        push_page(&mut builder, page);

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder
                .build()
                .fetch_all(&mut **transaction)
                .await
                .map_err(log_query_error("find_audit_entries"))?
        };

        rows_into(rows)
    }
}
