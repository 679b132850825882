use clintrack_db::SusarFilter;
use crate::utils::log_query_error;
use sqlx::{QueryBuilder, Row};
use std::error::Error;

use super::repo_impl::{push_susar_filter, SusarRepositoryImpl, SUSAR_FROM};

impl SusarRepositoryImpl {
    pub(super) async fn count_susars_impl(
        repo: &SusarRepositoryImpl,
        filter: &SusarFilter,
    ) -> Result<i64, Box<dyn Error + Send + Sync>> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*)");
        builder.push(SUSAR_FROM);
        push_susar_filter(&mut builder, filter);

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder
                .build()
                .fetch_one(&mut **transaction)
                .await
                .map_err(log_query_error("count_susars"))?
        };

        Ok(row.try_get(0)?)
    }
}
