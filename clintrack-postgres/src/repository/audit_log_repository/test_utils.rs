#[cfg(test)]
pub mod test_utils {
    use chrono::Utc;
    use clintrack_db::{AuditAction, AuditLogModel};
    use heapless::String as HeaplessString;
    use uuid::Uuid;

    pub fn create_test_audit_entry(user_id: Option<Uuid>) -> AuditLogModel {
        AuditLogModel {
            id: Uuid::new_v4(),
            user_id,
            action: AuditAction::Update,
            model_name: HeaplessString::try_from("Participant").unwrap(),
            object_id: HeaplessString::try_from(Uuid::new_v4().to_string().as_str()).unwrap(),
            changes: None,
            ip_address: None,
            timestamp: Utc::now(),
        }
    }
}
