use postgres_unit_of_work::Executor;
use sqlx::PgPool;
use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::repository::factory::{ClinTrackRepoFactory, ClinTrackRepositories};

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Connect with `config` and wrap the resulting pool
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        Ok(Self::new(Arc::new(config.connect().await?)))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Begin a transaction and build every repository on it.
    ///
    /// Dropping the result without calling `commit` rolls the transaction back.
    pub async fn create_all_repositories(&self) -> Result<ClinTrackRepositories, sqlx::Error> {
        let tx = self.pool.begin().await?;
        Ok(ClinTrackRepoFactory::build_with_executor(Executor::new(tx)))
    }
}
