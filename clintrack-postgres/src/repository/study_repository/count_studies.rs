use clintrack_db::StudyFilter;
use crate::utils::log_query_error;
use sqlx::{QueryBuilder, Row};
use std::error::Error;

use super::repo_impl::{push_study_filter, StudyRepositoryImpl};

impl StudyRepositoryImpl {
    pub(super) async fn count_studies_impl(
        repo: &StudyRepositoryImpl,
        filter: &StudyFilter,
    ) -> Result<i64, Box<dyn Error + Send + Sync>> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM study s");
        push_study_filter(&mut builder, filter);

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder
                .build()
                .fetch_one(&mut **transaction)
                .await
                .map_err(log_query_error("count_studies"))?
        };

        Ok(row.try_get(0)?)
    }
}
