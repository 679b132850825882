use chrono::{DateTime, Utc};
use clintrack_api::AuditEntrySummary;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::common_enums::AuditAction;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// - Append-only record of a user action against a model instance.
/// - Rows are never updated or deleted once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogModel {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub action: AuditAction,
    pub model_name: HeaplessString<100>,
    pub object_id: HeaplessString<100>,
    pub changes: Option<serde_json::Value>,
    pub ip_address: Option<HeaplessString<45>>,
    pub timestamp: DateTime<Utc>,
}

impl AuditLogModel {
    pub fn summary(&self) -> AuditEntrySummary {
        AuditEntrySummary {
            id: self.id,
            user_id: self.user_id,
            action: self.action.as_str().to_string(),
            model_name: self.model_name.to_string(),
            object_id: self.object_id.to_string(),
            timestamp: self.timestamp,
        }
    }
}

impl Identifiable for AuditLogModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
