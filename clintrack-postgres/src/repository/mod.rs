pub mod attendance_repository;
pub mod audit_log_repository;
pub mod factory;
pub mod participant_repository;
pub mod study_repository;
pub mod susar_repository;
pub mod user_repository;

pub use attendance_repository::AttendanceRepositoryImpl;
pub use audit_log_repository::AuditLogRepositoryImpl;
pub use factory::{ClinTrackRepoFactory, ClinTrackRepositories};
pub use participant_repository::ParticipantRepositoryImpl;
pub use study_repository::StudyRepositoryImpl;
pub use susar_repository::SusarRepositoryImpl;
pub use user_repository::UserRepositoryImpl;
