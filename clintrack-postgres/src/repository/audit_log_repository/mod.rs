pub mod repo_impl;
pub mod append_audit;
pub mod find_audit_entries;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::AuditLogRepositoryImpl;
