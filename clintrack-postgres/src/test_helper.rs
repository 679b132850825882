//! Transaction-per-test isolation for the repository tests.
//!
//! Every context runs in its own transaction, rolled back when the context is
//! dropped, so tests need no cleanup.

use crate::config::DatabaseConfig;
use crate::postgres_repositories::PostgresRepositories;
use crate::repository::factory::ClinTrackRepositories;

pub struct TestContext {
    pub repos: ClinTrackRepositories,
}

impl TestContext {
    pub fn repos(&self) -> &ClinTrackRepositories {
        &self.repos
    }
}

/// Connect using `DATABASE_URL`, run migrations and open a transaction.
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context().await?;
///     let participants = &ctx.repos().participant_repository;
///     // All changes are rolled back when ctx is dropped
///     Ok(())
/// }
/// ```
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let config = DatabaseConfig {
        max_connections: 1,
        ..DatabaseConfig::from_env()?
    };
    let repositories = PostgresRepositories::connect(&config).await?;

    sqlx::migrate!().run(repositories.pool()).await?;

    let repos = repositories.create_all_repositories().await?;
    Ok(TestContext { repos })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::study_repository::test_utils::test_utils::{
        create_test_study, insert_study,
    };
    use clintrack_db::{StudyFilter, StudyStore};

    #[tokio::test]
    async fn test_transaction_rollback() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let study = create_test_study("ROLLBACK");
        {
            let ctx = setup_test_context().await?;
            insert_study(&ctx.repos().executor, &study).await?;

            let by_id = StudyFilter::all().only(Some(study.id));
            let found = ctx.repos().study_repository.find_studies(&by_id).await?;
            assert_eq!(found.len(), 1);
        }

        {
            let ctx = setup_test_context().await?;
            let by_id = StudyFilter::all().only(Some(study.id));
            let found = ctx.repos().study_repository.find_studies(&by_id).await?;
            assert!(found.is_empty());
        }

        Ok(())
    }
}
