pub mod filter;
pub mod pagination;
pub mod participant_store;
pub mod study_store;
pub mod susar_store;
pub mod attendance_store;
pub mod audit_log_store;
pub mod user_store;
pub mod entity_store;

// Re-exports
pub use filter::*;
pub use pagination::*;
pub use participant_store::*;
pub use study_store::*;
pub use susar_store::*;
pub use attendance_store::*;
pub use audit_log_store::*;
pub use user_store::*;
pub use entity_store::*;
