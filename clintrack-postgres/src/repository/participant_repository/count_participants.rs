use clintrack_db::ParticipantFilter;
use crate::utils::log_query_error;
use sqlx::{QueryBuilder, Row};
use std::error::Error;

use super::repo_impl::{push_participant_filter, ParticipantRepositoryImpl};

impl ParticipantRepositoryImpl {
    pub(super) async fn count_participants_impl(
        repo: &ParticipantRepositoryImpl,
        filter: &ParticipantFilter,
    ) -> Result<i64, Box<dyn Error + Send + Sync>> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM participant p");
        push_participant_filter(&mut builder, filter);

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder
                .build()
                .fetch_one(&mut **transaction)
                .await
                .map_err(log_query_error("count_participants"))?
        };

        Ok(row.try_get(0)?)
    }
}
