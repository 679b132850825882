use async_trait::async_trait;
use clintrack_db::{AuditLogModel, AuditLogStore, PageRequest};
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};
use postgres_unit_of_work::Executor;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

/// Append-only access to `audit_log`. There is no update or delete.
pub struct AuditLogRepositoryImpl {
    pub executor: Executor,
}

impl AuditLogRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl AuditLogStore for AuditLogRepositoryImpl {
    async fn append_audit(
        &self,
        entry: AuditLogModel,
    ) -> Result<AuditLogModel, Box<dyn Error + Send + Sync>> {
        Self::append_audit_impl(self, entry).await
    }

    async fn find_audit_entries(
        &self,
        page: PageRequest,
    ) -> Result<Vec<AuditLogModel>, Box<dyn Error + Send + Sync>> {
        Self::find_audit_entries_impl(self, page).await
    }
}

impl TryFromRow<PgRow> for AuditLogModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(AuditLogModel {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            action: row.try_get("action")?,
            model_name: get_heapless_string(row, "model_name")?,
            object_id: get_heapless_string(row, "object_id")?,
            changes: row.try_get("changes")?,
            ip_address: get_optional_heapless_string(row, "ip_address")?,
            timestamp: row.try_get("timestamp")?,
        })
    }
}
