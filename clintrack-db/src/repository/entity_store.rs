use std::sync::Arc;

use super::{
    attendance_store::AttendanceStore, audit_log_store::AuditLogStore,
    participant_store::ParticipantStore, study_store::StudyStore, susar_store::SusarStore,
    user_store::UserStore,
};

/// Handle to every collection the reporting layer reads from.
///
/// Passed explicitly to whoever needs store access; cloning is cheap.
#[derive(Clone)]
pub struct EntityStore {
    pub participants: Arc<dyn ParticipantStore>,
    pub studies: Arc<dyn StudyStore>,
    pub susars: Arc<dyn SusarStore>,
    pub attendance: Arc<dyn AttendanceStore>,
    pub audit_logs: Arc<dyn AuditLogStore>,
    pub users: Arc<dyn UserStore>,
}

impl EntityStore {
    /// Build a handle from one value implementing every store trait
    pub fn from_shared<S>(store: Arc<S>) -> Self
    where
        S: ParticipantStore
            + StudyStore
            + SusarStore
            + AttendanceStore
            + AuditLogStore
            + UserStore
            + 'static,
    {
        Self {
            participants: store.clone(),
            studies: store.clone(),
            susars: store.clone(),
            attendance: store.clone(),
            audit_logs: store.clone(),
            users: store,
        }
    }
}
