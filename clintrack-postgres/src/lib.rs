pub mod config;
pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use config::{ConfigError, DatabaseConfig};
pub use postgres_repositories::PostgresRepositories;
pub use repository::factory::{ClinTrackRepoFactory, ClinTrackRepositories};

#[cfg(test)]
pub mod test_helper;
