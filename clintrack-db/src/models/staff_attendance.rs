use chrono::{DateTime, Duration, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// # Documentation
/// One staff login session. `logout_time` stays `None` while the session is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffAttendanceModel {
    pub id: Uuid,
    pub staff_id: Uuid,
    pub login_time: DateTime<Utc>,
    pub logout_time: Option<DateTime<Utc>>,
    pub location: Option<HeaplessString<200>>,
    pub ip_address: Option<HeaplessString<45>>,
}

impl StaffAttendanceModel {
    pub fn is_open(&self) -> bool {
        self.logout_time.is_none()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.logout_time.map(|logout| logout - self.login_time)
    }
}

impl Identifiable for StaffAttendanceModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
