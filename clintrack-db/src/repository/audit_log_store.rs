use async_trait::async_trait;
use std::error::Error;

use crate::models::AuditLogModel;
use crate::repository::pagination::PageRequest;

/// Append-only audit trail
#[async_trait]
pub trait AuditLogStore: Send + Sync {
    async fn append_audit(
        &self,
        entry: AuditLogModel,
    ) -> Result<AuditLogModel, Box<dyn Error + Send + Sync>>;

    /// Entries newest first
    async fn find_audit_entries(
        &self,
        page: PageRequest,
    ) -> Result<Vec<AuditLogModel>, Box<dyn Error + Send + Sync>>;
}
