pub mod identifiable;
pub mod common_enums;
pub mod participant;
pub mod study;
pub mod susar;
pub mod staff_attendance;
pub mod audit_log;
pub mod user;

// Re-exports
pub use identifiable::*;
pub use common_enums::*;
pub use participant::*;
pub use study::*;
pub use susar::*;
pub use staff_attendance::*;
pub use audit_log::*;
pub use user::*;
