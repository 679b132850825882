use clintrack_db::{StudyFilter, StudyModel};
use crate::utils::{log_query_error, rows_into};
use sqlx::QueryBuilder;
use std::error::Error;

use super::repo_impl::{push_study_filter, StudyRepositoryImpl};

impl StudyRepositoryImpl {
    pub(super) async fn find_studies_impl(
        repo: &StudyRepositoryImpl,
        filter: &StudyFilter,
    ) -> Result<Vec<StudyModel>, Box<dyn Error + Send + Sync>> {
        let mut builder = QueryBuilder::new("SELECT s.* FROM study s");
        push_study_filter(&mut builder, filter);
        builder.push(" ORDER BY s.name");

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder
                .build()
                .fetch_all(&mut **transaction)
                .await
                .map_err(log_query_error("find_studies"))?
        };

        rows_into(rows)
    }
}
