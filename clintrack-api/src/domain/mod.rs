pub mod metric;
pub mod request;
pub mod role;

pub use metric::*;
pub use request::*;
pub use role::*;
