use clintrack_api::GroupCount;
use clintrack_db::{ParticipantField, ParticipantFilter};
use crate::utils::{group_counts, log_query_error};
use sqlx::QueryBuilder;
use std::error::Error;

use super::repo_impl::{push_participant_filter, ParticipantRepositoryImpl};

/// Grouping expression yielding the stored value as text
fn group_key(field: ParticipantField) -> &'static str {
    match field {
        ParticipantField::Status => "p.status::text",
        ParticipantField::Gender => "p.gender::text",
        ParticipantField::Location => "p.location",
        ParticipantField::Study => "p.study_id::text",
    }
}

impl ParticipantRepositoryImpl {
    pub(super) async fn count_participants_by_impl(
        repo: &ParticipantRepositoryImpl,
        field: ParticipantField,
        filter: &ParticipantFilter,
    ) -> Result<Vec<GroupCount>, Box<dyn Error + Send + Sync>> {
        let mut builder = QueryBuilder::new("SELECT ");
        builder
            .push(group_key(field))
            .push(" AS key, COUNT(*) AS count FROM participant p");
        push_participant_filter(&mut builder, filter);
        builder.push(" GROUP BY 1");

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder
                .build()
                .fetch_all(&mut **transaction)
                .await
                .map_err(log_query_error("count_participants_by"))?
        };

        group_counts(rows)
    }
}
