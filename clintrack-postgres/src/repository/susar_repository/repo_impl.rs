use async_trait::async_trait;
use clintrack_api::GroupCount;
use clintrack_db::{PageRequest, SusarField, SusarFilter, SusarModel, SusarStore};
use crate::utils::{get_heapless_string, TryFromRow};
use postgres_unit_of_work::Executor;
use sqlx::{postgres::PgRow, Postgres, QueryBuilder, Row};
use std::error::Error;

pub struct SusarRepositoryImpl {
    pub executor: Executor,
}

impl SusarRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

/// SUSARs joined with their participant, so study filters and study grouping
/// can use `p.study_id`
pub(crate) const SUSAR_FROM: &str = " FROM susar s JOIN participant p ON p.id = s.participant_id";

pub(crate) fn push_susar_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &SusarFilter) {
    builder.push(" WHERE TRUE");
    if let Some(study_id) = filter.study_id {
        builder.push(" AND p.study_id = ").push_bind(study_id);
    }
    if !filter.severities.is_empty() {
        let severities: Vec<String> = filter
            .severities
            .iter()
            .map(|severity| severity.as_str().to_string())
            .collect();
        builder.push(" AND s.severity::text = ANY(").push_bind(severities).push(")");
    }
    if !filter.outcomes.is_empty() {
        let outcomes: Vec<String> = filter
            .outcomes
            .iter()
            .map(|outcome| outcome.as_str().to_string())
            .collect();
        builder.push(" AND s.outcome::text = ANY(").push_bind(outcomes).push(")");
    }
    if let Some(required) = filter.follow_up_required {
        builder.push(" AND s.follow_up_required = ").push_bind(required);
    }
    if let Some(since) = filter.created_since {
        builder.push(" AND s.created_at >= ").push_bind(since);
    }
    if let Some(date) = filter.detected_on {
        builder
            .push(" AND (s.detection_date AT TIME ZONE 'UTC')::date = ")
            .push_bind(date);
    }
    if let Some(range) = filter.onset {
        builder
            .push(" AND (s.onset_date AT TIME ZONE 'UTC')::date BETWEEN ")
            .push_bind(range.start)
            .push(" AND ")
            .push_bind(range.end);
    }
}

#[async_trait]
impl SusarStore for SusarRepositoryImpl {
    async fn find_susars(
        &self,
        filter: &SusarFilter,
        page: Option<PageRequest>,
    ) -> Result<Vec<SusarModel>, Box<dyn Error + Send + Sync>> {
        Self::find_susars_impl(self, filter, page).await
    }

    async fn count_susars(
        &self,
        filter: &SusarFilter,
    ) -> Result<i64, Box<dyn Error + Send + Sync>> {
        Self::count_susars_impl(self, filter).await
    }

    async fn count_susars_by(
        &self,
        field: SusarField,
        filter: &SusarFilter,
    ) -> Result<Vec<GroupCount>, Box<dyn Error + Send + Sync>> {
        Self::count_susars_by_impl(self, field, filter).await
    }
}

impl TryFromRow<PgRow> for SusarModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(SusarModel {
            id: row.try_get("id")?,
            susar_code: get_heapless_string(row, "susar_code")?,
            participant_id: row.try_get("participant_id")?,
            event_description: row.try_get("event_description")?,
            onset_date: row.try_get("onset_date")?,
            detection_date: row.try_get("detection_date")?,
            severity: row.try_get("severity")?,
            outcome: row.try_get("outcome")?,
            is_related_to_study: row.try_get("is_related_to_study")?,
            hospitalization_required: row.try_get("hospitalization_required")?,
            reported_to_irb: row.try_get("reported_to_irb")?,
            irb_report_date: row.try_get("irb_report_date")?,
            reported_to_sponsor: row.try_get("reported_to_sponsor")?,
            sponsor_report_date: row.try_get("sponsor_report_date")?,
            follow_up_required: row.try_get("follow_up_required")?,
            follow_up_notes: row.try_get("follow_up_notes")?,
            reported_by: row.try_get("reported_by")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
