use clintrack_api::GroupCount;
use clintrack_db::{SusarField, SusarFilter};
use crate::utils::{group_counts, log_query_error};
use sqlx::QueryBuilder;
use std::error::Error;

use super::repo_impl::{push_susar_filter, SusarRepositoryImpl, SUSAR_FROM};

fn group_key(field: SusarField) -> &'static str {
    match field {
        SusarField::Severity => "s.severity::text",
        SusarField::Outcome => "s.outcome::text",
        SusarField::Study => "p.study_id::text",
    }
}

impl SusarRepositoryImpl {
    pub(super) async fn count_susars_by_impl(
        repo: &SusarRepositoryImpl,
        field: SusarField,
        filter: &SusarFilter,
    ) -> Result<Vec<GroupCount>, Box<dyn Error + Send + Sync>> {
        let mut builder = QueryBuilder::new("SELECT ");
        builder.push(group_key(field)).push(" AS key, COUNT(*) AS count");
        builder.push(SUSAR_FROM);
        push_susar_filter(&mut builder, filter);
        builder.push(" GROUP BY 1");

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder
                .build()
                .fetch_all(&mut **transaction)
                .await
                .map_err(log_query_error("count_susars_by"))?
        };

        group_counts(rows)
    }
}
