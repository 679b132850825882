use async_trait::async_trait;
use clintrack_db::{StudyFilter, StudyModel, StudyStore};
use crate::utils::{get_heapless_string, TryFromRow};
use postgres_unit_of_work::Executor;
use sqlx::{postgres::PgRow, Postgres, QueryBuilder, Row};
use std::error::Error;

pub struct StudyRepositoryImpl {
    pub executor: Executor,
}

impl StudyRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

pub(crate) fn push_study_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &StudyFilter) {
    builder.push(" WHERE TRUE");
    if let Some(study_id) = filter.study_id {
        builder.push(" AND s.id = ").push_bind(study_id);
    }
    if let Some(is_active) = filter.is_active {
        builder.push(" AND s.is_active = ").push_bind(is_active);
    }
}

#[async_trait]
impl StudyStore for StudyRepositoryImpl {
    async fn find_studies(
        &self,
        filter: &StudyFilter,
    ) -> Result<Vec<StudyModel>, Box<dyn Error + Send + Sync>> {
        Self::find_studies_impl(self, filter).await
    }

    async fn count_studies(
        &self,
        filter: &StudyFilter,
    ) -> Result<i64, Box<dyn Error + Send + Sync>> {
        Self::count_studies_impl(self, filter).await
    }
}

impl TryFromRow<PgRow> for StudyModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(StudyModel {
            id: row.try_get("id")?,
            code: get_heapless_string(row, "code")?,
            name: get_heapless_string(row, "name")?,
            description: row.try_get("description")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
