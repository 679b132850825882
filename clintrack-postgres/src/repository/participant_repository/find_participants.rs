use clintrack_db::{PageRequest, ParticipantFilter, ParticipantModel};
use crate::utils::{log_query_error, push_page, rows_into};
use sqlx::QueryBuilder;
use std::error::Error;

use super::repo_impl::{push_participant_filter, ParticipantRepositoryImpl};

impl ParticipantRepositoryImpl {
    pub(super) async fn find_participants_impl(
        repo: &ParticipantRepositoryImpl,
        filter: &ParticipantFilter,
        page: Option<PageRequest>,
    ) -> Result<Vec<ParticipantModel>, Box<dyn Error + Send + Sync>> {
        let mut builder = QueryBuilder::new("SELECT p.* FROM participant p");
        push_participant_filter(&mut builder, filter);
        builder.push(" ORDER BY p.created_at DESC, p.id");
        if let Some(page) = page {
            push_page(&mut builder, page);
        }

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder
                .build()
                .fetch_all(&mut **transaction)
                .await
                .map_err(log_query_error("find_participants"))?
        };

        rows_into(rows)
    }
}
