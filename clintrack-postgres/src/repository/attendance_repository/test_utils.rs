#[cfg(test)]
pub mod test_utils {
    use chrono::{DateTime, Utc};
    use clintrack_db::StaffAttendanceModel;
    use uuid::Uuid;

    /// Open session starting at `login_time`
    pub fn create_test_session(staff_id: Uuid, login_time: DateTime<Utc>) -> StaffAttendanceModel {
        StaffAttendanceModel {
            id: Uuid::new_v4(),
            staff_id,
            login_time,
            logout_time: None,
            location: None,
            ip_address: None,
        }
    }
}
