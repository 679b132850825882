pub mod repo_impl;
pub mod find_attendance;
pub mod login_counts_by_staff;
pub mod session_duration_totals;
pub mod record_login;
pub mod close_latest_session;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::AttendanceRepositoryImpl;
