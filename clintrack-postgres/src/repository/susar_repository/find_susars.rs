use clintrack_db::{PageRequest, SusarFilter, SusarModel, SusarSort};
use crate::utils::{log_query_error, push_page, rows_into};
use sqlx::QueryBuilder;
use std::error::Error;

use super::repo_impl::{push_susar_filter, SusarRepositoryImpl, SUSAR_FROM};

fn order_by(sort: SusarSort) -> &'static str {
    match sort {
        SusarSort::CreatedDesc => " ORDER BY s.created_at DESC, s.id",
        SusarSort::OnsetDesc => " ORDER BY s.onset_date DESC, s.id",
    }
}

impl SusarRepositoryImpl {
    pub(super) async fn find_susars_impl(
        repo: &SusarRepositoryImpl,
        filter: &SusarFilter,
        page: Option<PageRequest>,
    ) -> Result<Vec<SusarModel>, Box<dyn Error + Send + Sync>> {
        let mut builder = QueryBuilder::new("SELECT s.*");
        builder.push(SUSAR_FROM);
        push_susar_filter(&mut builder, filter);
        builder.push(order_by(filter.sort));
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
                .map_err(log_query_error("find_susars"))?
        };

        rows_into(rows)
    }
}
