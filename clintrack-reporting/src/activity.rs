use chrono::{DateTime, Utc};
use clintrack_api::{ApiError, ApiResult};
use clintrack_db::{AuditAction, AuditLogModel, EntityStore, StaffAttendanceModel};
use heapless::String as HeaplessString;
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;

/// Attendance and audit writes performed on login and logout.
///
/// These are the only writes this workspace performs; each is a single-row
/// insert or update.
#[derive(Clone)]
pub struct ActivityTracker {
    store: EntityStore,
}

impl ActivityTracker {
    pub fn new(store: EntityStore) -> Self {
        Self { store }
    }

    /// Open a new attendance session and audit the login as a `view` of the user.
    ///
    /// The two writes are not atomic on their own. They rely on the caller's
    /// unit of work: if the audit append fails, the caller must not commit.
    pub async fn record_login(
        &self,
        user_id: Uuid,
        ip_address: Option<&str>,
        location: Option<&str>,
        at: DateTime<Utc>,
    ) -> ApiResult<StaffAttendanceModel> {
        let ip_address = ip_address.map(|ip| bounded::<45>("ip_address", ip)).transpose()?;
        let location = location.map(|loc| bounded::<200>("location", loc)).transpose()?;

        let session = self
            .store
            .attendance
            .record_login(StaffAttendanceModel {
                id: Uuid::new_v4(),
                staff_id: user_id,
                login_time: at,
                logout_time: None,
                location,
                ip_address: ip_address.clone(),
            })
            .await?;

        self.append_audit(AuditLogModel {
            id: Uuid::new_v4(),
            user_id: Some(user_id),
            action: AuditAction::View,
            model_name: bounded("model_name", "User")?,
            object_id: bounded("object_id", &user_id.to_string())?,
            changes: None,
            ip_address,
            timestamp: at,
        })
        .await?;

        info!(%user_id, session_id = %session.id, "Recorded login");
        Ok(session)
    }

    /// Close the user's most recent open session.
    ///
    /// Returns `None` when there is nothing to close.
    pub async fn record_logout(
        &self,
        user_id: Uuid,
        at: DateTime<Utc>,
    ) -> ApiResult<Option<StaffAttendanceModel>> {
        let closed = self.store.attendance.close_latest_session(user_id, at).await?;
        match &closed {
            Some(session) => info!(%user_id, session_id = %session.id, "Recorded logout"),
            None => info!(%user_id, "Logout without an open session"),
        }
        Ok(closed)
    }

    pub async fn append_audit(&self, entry: AuditLogModel) -> ApiResult<AuditLogModel> {
        Ok(self.store.audit_logs.append_audit(entry).await?)
    }
}

fn bounded<const N: usize>(field: &str, value: &str) -> ApiResult<HeaplessString<N>> {
    HeaplessString::from_str(value).map_err(|_| {
        ApiError::ValidationError(format!("{field} exceeds maximum length of {N} characters"))
    })
}
