use async_trait::async_trait;
use clintrack_api::GroupCount;
use clintrack_db::{
    PageRequest, ParticipantField, ParticipantFilter, ParticipantModel, ParticipantStore,
};
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};
use postgres_unit_of_work::Executor;
use sqlx::{postgres::PgRow, Postgres, QueryBuilder, Row};
use std::error::Error;

pub struct ParticipantRepositoryImpl {
    pub executor: Executor,
}

impl ParticipantRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

/// Append the `WHERE` clause for `filter`, with the table aliased as `p`
pub(crate) fn push_participant_filter(
    builder: &mut QueryBuilder<'_, Postgres>,
    filter: &ParticipantFilter,
) {
    builder.push(" WHERE TRUE");
    if let Some(study_id) = filter.study_id {
        builder.push(" AND p.study_id = ").push_bind(study_id);
    }
    if !filter.statuses.is_empty() {
        let statuses: Vec<String> = filter
            .statuses
            .iter()
            .map(|status| status.as_str().to_string())
            .collect();
        builder.push(" AND p.status::text = ANY(").push_bind(statuses).push(")");
    }
    if let Some(created_by) = filter.created_by {
        builder.push(" AND p.created_by = ").push_bind(created_by);
    }
    if let Some(since) = filter.created_since {
        builder.push(" AND p.created_at >= ").push_bind(since);
    }
    if let Some(date) = filter.created_on {
        builder
            .push(" AND (p.created_at AT TIME ZONE 'UTC')::date = ")
            .push_bind(date);
    }
    if let Some(range) = filter.enrolled {
        builder
            .push(" AND p.enrollment_date BETWEEN ")
            .push_bind(range.start)
            .push(" AND ")
            .push_bind(range.end);
    }
}

#[async_trait]
impl ParticipantStore for ParticipantRepositoryImpl {
    async fn find_participants(
        &self,
        filter: &ParticipantFilter,
        page: Option<PageRequest>,
    ) -> Result<Vec<ParticipantModel>, Box<dyn Error + Send + Sync>> {
        Self::find_participants_impl(self, filter, page).await
    }

    async fn count_participants(
        &self,
        filter: &ParticipantFilter,
    ) -> Result<i64, Box<dyn Error + Send + Sync>> {
        Self::count_participants_impl(self, filter).await
    }

    async fn count_participants_by(
        &self,
        field: ParticipantField,
        filter: &ParticipantFilter,
    ) -> Result<Vec<GroupCount>, Box<dyn Error + Send + Sync>> {
        Self::count_participants_by_impl(self, field, filter).await
    }
}

impl TryFromRow<PgRow> for ParticipantModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ParticipantModel {
            id: row.try_get("id")?,
            participant_code: get_heapless_string(row, "participant_code")?,
            study_id: row.try_get("study_id")?,
            first_name: get_heapless_string(row, "first_name")?,
            last_name: get_heapless_string(row, "last_name")?,
            date_of_birth: row.try_get("date_of_birth")?,
            gender: row.try_get("gender")?,
            location: get_heapless_string(row, "location")?,
            county: get_optional_heapless_string(row, "county")?,
            status: row.try_get("status")?,
            enrollment_date: row.try_get("enrollment_date")?,
            created_by: row.try_get("created_by")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
