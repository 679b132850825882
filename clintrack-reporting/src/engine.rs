use chrono::{DateTime, NaiveDate, Utc};
use clintrack_api::{
    ApiResult, AuditEntrySummary, GroupCount, ParticipantSummary, StaffActivity, StudySummary,
    SusarSummary,
};
use clintrack_db::{
    AttendanceFilter, DateRange, EntityStore, PageRequest, ParticipantField,
    ParticipantFilter, ParticipantStatus, StudyFilter, SusarField, SusarFilter,
};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::bucketing::{self, BucketSeries, Granularity};
use crate::metrics;

/// Store-backed metric computation.
///
/// Each method issues its own read queries against the injected store and
/// returns a finished value. Store failures are returned as
/// `ApiError::DatabaseError` and never swallowed.
#[derive(Clone)]
pub struct AggregationEngine {
    store: EntityStore,
}

impl AggregationEngine {
    pub fn new(store: EntityStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub async fn participant_count(&self, filter: &ParticipantFilter) -> ApiResult<i64> {
        Ok(self.store.participants.count_participants(filter).await?)
    }

    pub async fn susar_count(&self, filter: &SusarFilter) -> ApiResult<i64> {
        Ok(self.store.susars.count_susars(filter).await?)
    }

    pub async fn study_count(&self, filter: &StudyFilter) -> ApiResult<i64> {
        Ok(self.store.studies.count_studies(filter).await?)
    }

    /// Grouped participant counts, largest group first
    #[instrument(level = "debug", skip(self))]
    pub async fn participant_breakdown(
        &self,
        field: ParticipantField,
        filter: &ParticipantFilter,
    ) -> ApiResult<Vec<GroupCount>> {
        let groups = self.store.participants.count_participants_by(field, filter).await?;
        Ok(metrics::sort_breakdown(groups))
    }

    /// Grouped SUSAR counts, largest group first
    #[instrument(level = "debug", skip(self))]
    pub async fn susar_breakdown(
        &self,
        field: SusarField,
        filter: &SusarFilter,
    ) -> ApiResult<Vec<GroupCount>> {
        let groups = self.store.susars.count_susars_by(field, filter).await?;
        Ok(metrics::sort_breakdown(groups))
    }

    pub async fn top_locations(
        &self,
        filter: &ParticipantFilter,
        limit: usize,
    ) -> ApiResult<Vec<GroupCount>> {
        let mut groups = self.participant_breakdown(ParticipantField::Location, filter).await?;
        groups.truncate(limit);
        Ok(groups)
    }

    /// Per-study participant and SUSAR counts, most participants first.
    ///
    /// With `study_id` set only that study is reported.
    #[instrument(level = "debug", skip(self))]
    pub async fn study_breakdown(&self, study_id: Option<Uuid>) -> ApiResult<Vec<StudySummary>> {
        let studies = self
            .store
            .studies
            .find_studies(&StudyFilter::all().only(study_id))
            .await?;

        let scope = ParticipantFilter::all().in_study(study_id);
        let totals = self.counts_by_study(&scope).await?;
        let active = self
            .counts_by_study(&scope.clone().with_status(ParticipantStatus::Active))
            .await?;
        let screening = self
            .counts_by_study(&scope.clone().with_status(ParticipantStatus::Screening))
            .await?;
        let completed = self
            .counts_by_study(&scope.clone().with_status(ParticipantStatus::Completed))
            .await?;
        let susars = keyed(
            self.store
                .susars
                .count_susars_by(SusarField::Study, &SusarFilter::all().in_study(study_id))
                .await?,
        );

        let lookup =
            |counts: &HashMap<String, i64>, key: &str| counts.get(key).copied().unwrap_or(0);
        let mut summaries: Vec<StudySummary> = studies
            .iter()
            .map(|study| {
                let key = study.id.to_string();
                let participant_count = lookup(&totals, &key);
                StudySummary {
                    study_id: study.id,
                    code: study.code.to_string(),
                    name: study.name.to_string(),
                    is_active: study.is_active,
                    participant_count,
                    active_count: lookup(&active, &key),
                    screening_count: lookup(&screening, &key),
                    susar_count: lookup(&susars, &key),
                    completion_rate: metrics::completion_rate(
                        lookup(&completed, &key),
                        participant_count,
                    ),
                }
            })
            .collect();

        summaries.sort_by(|a, b| {
            b.participant_count
                .cmp(&a.participant_count)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(summaries)
    }

    async fn counts_by_study(&self, filter: &ParticipantFilter) -> ApiResult<HashMap<String, i64>> {
        let groups = self
            .store
            .participants
            .count_participants_by(ParticipantField::Study, filter)
            .await?;
        Ok(keyed(groups))
    }

    /// Completed share of the participants in `study_id`, or of all participants
    #[instrument(level = "debug", skip(self))]
    pub async fn completion_rate(&self, study_id: Option<Uuid>) -> ApiResult<Decimal> {
        let scope = ParticipantFilter::all().in_study(study_id);
        let total = self.participant_count(&scope).await?;
        let completed = self
            .participant_count(&scope.with_status(ParticipantStatus::Completed))
            .await?;
        let rate = metrics::completion_rate(completed, total);
        debug!(total, completed, %rate, "completion rate");
        Ok(rate)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn resolution_rate(&self, filter: &SusarFilter) -> ApiResult<Decimal> {
        let susars = self.store.susars.find_susars(filter, None).await?;
        Ok(metrics::resolution_rate(&susars))
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn follow_up_compliance_rate(&self, filter: &SusarFilter) -> ApiResult<Decimal> {
        let filter = filter.clone().follow_up_required();
        let susars = self.store.susars.find_susars(&filter, None).await?;
        Ok(metrics::follow_up_compliance_rate(&susars))
    }

    /// Enrollments in the month of `as_of` so far against the whole previous month
    #[instrument(level = "debug", skip(self))]
    pub async fn enrollment_growth_rate(
        &self,
        as_of: NaiveDate,
        study_id: Option<Uuid>,
    ) -> ApiResult<Decimal> {
        let scope = ParticipantFilter::all().in_study(study_id);
        let current = self
            .participant_count(&scope.clone().enrolled_within(bucketing::month_to_date(as_of)))
            .await?;
        let previous = self
            .participant_count(&scope.enrolled_within(bucketing::previous_month(as_of)))
            .await?;
        let rate = metrics::growth_rate(previous, current);
        debug!(previous, current, %rate, "enrollment growth");
        Ok(rate)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn average_session_hours(&self, filter: &AttendanceFilter) -> ApiResult<Decimal> {
        let totals = self.store.attendance.session_duration_totals(filter).await?;
        Ok(metrics::average_session_hours(totals))
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn average_study_duration_days(&self, filter: &StudyFilter) -> ApiResult<Decimal> {
        let studies = self.store.studies.find_studies(filter).await?;
        Ok(metrics::average_study_duration_days(&studies))
    }

    /// Participants bucketed by enrollment date. Participants without one are left out.
    #[instrument(level = "debug", skip(self))]
    pub async fn enrollment_series(
        &self,
        range: DateRange,
        granularity: Granularity,
        study_id: Option<Uuid>,
    ) -> ApiResult<BucketSeries> {
        let filter = ParticipantFilter::all().in_study(study_id).enrolled_within(range);
        let participants = self.store.participants.find_participants(&filter, None).await?;
        Ok(BucketSeries::from_dates(
            range,
            granularity,
            participants.iter().filter_map(|p| p.enrollment_date),
        ))
    }

    /// SUSARs bucketed by onset date
    #[instrument(level = "debug", skip(self))]
    pub async fn susar_onset_series(
        &self,
        range: DateRange,
        granularity: Granularity,
        study_id: Option<Uuid>,
    ) -> ApiResult<BucketSeries> {
        let filter = SusarFilter::all().in_study(study_id).onset_within(range);
        let susars = self.store.susars.find_susars(&filter, None).await?;
        Ok(BucketSeries::from_dates(
            range,
            granularity,
            susars.iter().map(|s| s.onset_date.date_naive()),
        ))
    }

    /// Staff members with the most logins since `since`.
    ///
    /// Ties are ordered by username. Sessions of users that no longer exist
    /// are not reported.
    #[instrument(level = "debug", skip(self))]
    pub async fn staff_activity(
        &self,
        since: DateTime<Utc>,
        limit: usize,
    ) -> ApiResult<Vec<StaffActivity>> {
        let counts = self
            .store
            .attendance
            .login_counts_by_staff(&AttendanceFilter::all().login_since(since))
            .await?;
        let ids: Vec<Uuid> = counts.iter().map(|(id, _)| *id).collect();
        let users = self.store.users.load_users(&ids).await?;

        let mut leaderboard: Vec<StaffActivity> = counts
            .into_iter()
            .zip(users)
            .filter_map(|((user_id, login_count), user)| {
                user.map(|user| StaffActivity {
                    user_id,
                    username: user.username.to_string(),
                    login_count,
                })
            })
            .collect();

        leaderboard.sort_by(|a, b| {
            b.login_count
                .cmp(&a.login_count)
                .then_with(|| a.username.cmp(&b.username))
        });
        leaderboard.truncate(limit);
        Ok(leaderboard)
    }

    pub async fn recent_participants(
        &self,
        filter: &ParticipantFilter,
        limit: usize,
    ) -> ApiResult<Vec<ParticipantSummary>> {
        let participants = self
            .store
            .participants
            .find_participants(filter, Some(PageRequest::first(limit)))
            .await?;
        Ok(participants.iter().map(|p| p.summary()).collect())
    }

    pub async fn recent_susars(
        &self,
        filter: &SusarFilter,
        limit: usize,
    ) -> ApiResult<Vec<SusarSummary>> {
        let susars = self
            .store
            .susars
            .find_susars(filter, Some(PageRequest::first(limit)))
            .await?;
        Ok(susars.iter().map(|s| s.summary()).collect())
    }

    pub async fn recent_audit_entries(&self, limit: usize) -> ApiResult<Vec<AuditEntrySummary>> {
        let entries = self
            .store
            .audit_logs
            .find_audit_entries(PageRequest::first(limit))
            .await?;
        Ok(entries.iter().map(|e| e.summary()).collect())
    }
}

fn keyed(groups: Vec<GroupCount>) -> HashMap<String, i64> {
    groups.into_iter().map(|group| (group.key, group.count)).collect()
}
