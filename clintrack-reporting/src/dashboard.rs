use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use clintrack_api::{
    ApiResult, ChartSeries, DashboardMetrics, DashboardRequest, DashboardRole, DashboardService,
    MetricValue, TrendRequest,
};
use clintrack_db::{
    AttendanceFilter, EntityStore, ParticipantField, ParticipantFilter, ParticipantStatus,
    StudyFilter, SusarField, SusarFilter, SusarOutcome, SusarSeverity, SusarSort,
};
use tracing::{debug, info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::bucketing::{self, Granularity};
use crate::config::DashboardConfig;
use crate::engine::AggregationEngine;

/// Builds the per-role metric set from an [`AggregationEngine`].
///
/// Holds no state between calls. Every relative window is computed from the
/// request's `as_of` instant.
#[derive(Clone)]
pub struct DashboardAssembler {
    engine: AggregationEngine,
    config: DashboardConfig,
}

impl DashboardAssembler {
    pub fn new(store: EntityStore) -> Self {
        Self {
            engine: AggregationEngine::new(store),
            config: DashboardConfig::default(),
        }
    }

    /// Use `config` in place of the defaults.
    ///
    /// Out-of-range windows or list sizes are rejected with
    /// `ApiError::ValidationError`.
    pub fn with_config(store: EntityStore, config: DashboardConfig) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self {
            engine: AggregationEngine::new(store),
            config,
        })
    }

    pub fn engine(&self) -> &AggregationEngine {
        &self.engine
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Render the dashboard for a raw role string.
    ///
    /// Unrecognized roles get the administrator dashboard.
    pub async fn dashboard_for_role(
        &self,
        role: &str,
        user_id: Uuid,
        study_id: Option<Uuid>,
        as_of: DateTime<Utc>,
    ) -> ApiResult<DashboardMetrics> {
        let resolved = match DashboardRole::parse(role) {
            Some(resolved) => resolved,
            None => {
                info!(role, "Unknown role, falling back to the admin dashboard");
                DashboardRole::Admin
            }
        };
        let request = DashboardRequest {
            role: resolved,
            user_id,
            study_id,
            as_of,
        };
        self.dashboard(&request).await
    }

    fn days_before(as_of: DateTime<Utc>, days: i64) -> DateTime<Utc> {
        as_of - Duration::days(days)
    }

    #[instrument(skip(self, request), fields(as_of = %request.as_of))]
    async fn admin_dashboard(&self, request: &DashboardRequest) -> ApiResult<DashboardMetrics> {
        let engine = &self.engine;
        let config = &self.config;
        let today = request.as_of.date_naive();
        let recent_since = Self::days_before(request.as_of, config.recent_window_days);
        let everyone = ParticipantFilter::all();
        let every_susar = SusarFilter::all();

        let mut metrics = DashboardMetrics::new(DashboardRole::Admin, request.as_of);

        metrics.insert(
            "total_participants",
            MetricValue::Count(engine.participant_count(&everyone).await?),
        );
        metrics.insert(
            "active_participants",
            MetricValue::Count(
                engine
                    .participant_count(&everyone.clone().with_status(ParticipantStatus::Active))
                    .await?,
            ),
        );
        metrics.insert(
            "total_studies",
            MetricValue::Count(engine.study_count(&StudyFilter::all().active()).await?),
        );
        metrics.insert("total_susars", MetricValue::Count(engine.susar_count(&every_susar).await?));
        metrics.insert(
            "critical_susars",
            MetricValue::Count(
                engine
                    .susar_count(&every_susar.clone().with_severities(&SusarSeverity::CRITICAL))
                    .await?,
            ),
        );
        metrics.insert(
            "recent_participants",
            MetricValue::Count(
                engine
                    .participant_count(&everyone.clone().created_since(recent_since))
                    .await?,
            ),
        );
        metrics.insert(
            "recent_susars",
            MetricValue::Count(
                engine
                    .susar_count(&every_susar.clone().created_since(recent_since))
                    .await?,
            ),
        );

        metrics.insert(
            "status_breakdown",
            MetricValue::Breakdown(
                engine
                    .participant_breakdown(ParticipantField::Status, &everyone)
                    .await?,
            ),
        );
        metrics.insert(
            "gender_distribution",
            MetricValue::Breakdown(
                engine
                    .participant_breakdown(ParticipantField::Gender, &everyone)
                    .await?,
            ),
        );
        metrics.insert(
            "top_locations",
            MetricValue::Breakdown(engine.top_locations(&everyone, config.top_locations).await?),
        );
        metrics.insert(
            "susar_severity",
            MetricValue::Breakdown(
                engine
                    .susar_breakdown(SusarField::Severity, &every_susar)
                    .await?,
            ),
        );
        metrics.insert(
            "susar_outcomes",
            MetricValue::Breakdown(
                engine
                    .susar_breakdown(SusarField::Outcome, &every_susar)
                    .await?,
            ),
        );
        metrics.insert(
            "study_breakdown",
            MetricValue::Studies(engine.study_breakdown(None).await?),
        );

        let monthly = bucketing::last_n_months(today, config.trend_months);
        let daily = bucketing::last_n_days(today, config.daily_trend_days);
        metrics.insert(
            "enrollment_trends",
            MetricValue::Series(
                engine
                    .enrollment_series(monthly, Granularity::Month, None)
                    .await?
                    .into(),
            ),
        );
        metrics.insert(
            "susar_trends",
            MetricValue::Series(
                engine
                    .susar_onset_series(monthly, Granularity::Month, None)
                    .await?
                    .into(),
            ),
        );
        metrics.insert(
            "daily_enrollment",
            MetricValue::Series(
                engine
                    .enrollment_series(daily, Granularity::Day, None)
                    .await?
                    .into(),
            ),
        );
        metrics.insert(
            "daily_susars",
            MetricValue::Series(
                engine
                    .susar_onset_series(daily, Granularity::Day, None)
                    .await?
                    .into(),
            ),
        );

        let activity_since = Self::days_before(request.as_of, config.staff_activity_window_days);
        metrics.insert(
            "staff_activity",
            MetricValue::Leaderboard(
                engine
                    .staff_activity(activity_since, config.leaderboard_size)
                    .await?,
            ),
        );
        metrics.insert(
            "recent_audit_logs",
            MetricValue::AuditEntries(engine.recent_audit_entries(config.audit_list_size).await?),
        );
        metrics.insert(
            "recent_participants_list",
            MetricValue::Participants(
                engine
                    .recent_participants(&everyone, config.admin_list_size)
                    .await?,
            ),
        );
        metrics.insert(
            "recent_susars_list",
            MetricValue::Susars(engine.recent_susars(&every_susar, config.admin_list_size).await?),
        );

        metrics.insert(
            "susar_resolution_rate",
            MetricValue::Rate(engine.resolution_rate(&every_susar).await?),
        );
        metrics.insert(
            "follow_up_compliance_rate",
            MetricValue::Rate(engine.follow_up_compliance_rate(&every_susar).await?),
        );
        metrics.insert(
            "enrollment_growth_rate",
            MetricValue::Rate(engine.enrollment_growth_rate(today, None).await?),
        );
        metrics.insert(
            "average_session_hours",
            MetricValue::Rate(engine.average_session_hours(&AttendanceFilter::all()).await?),
        );
        metrics.insert(
            "average_study_duration_days",
            MetricValue::Rate(engine.average_study_duration_days(&StudyFilter::all()).await?),
        );

        debug!(metrics = metrics.metrics.len(), "admin dashboard assembled");
        Ok(metrics)
    }

    /// Study-scoped view. Without a study every study is in scope.
    #[instrument(skip(self, request), fields(as_of = %request.as_of, study_id = ?request.study_id))]
    async fn coordinator_dashboard(
        &self,
        request: &DashboardRequest,
    ) -> ApiResult<DashboardMetrics> {
        let engine = &self.engine;
        let config = &self.config;
        let study_id = request.study_id;
        let scope = ParticipantFilter::all().in_study(study_id);
        let susar_scope = SusarFilter::all().in_study(study_id);
        let pending = Self::pending_filter(&susar_scope, &config.coordinator_pending_outcomes);

        let mut metrics = DashboardMetrics::new(DashboardRole::Coordinator, request.as_of);

        metrics.insert(
            "total_participants",
            MetricValue::Count(engine.participant_count(&scope).await?),
        );
        metrics.insert(
            "active_participants",
            MetricValue::Count(
                engine
                    .participant_count(&scope.clone().with_status(ParticipantStatus::Active))
                    .await?,
            ),
        );
        metrics.insert(
            "screening_participants",
            MetricValue::Count(
                engine
                    .participant_count(&scope.clone().with_status(ParticipantStatus::Screening))
                    .await?,
            ),
        );
        metrics.insert("total_susars", MetricValue::Count(engine.susar_count(&susar_scope).await?));
        metrics.insert("pending_susars", MetricValue::Count(engine.susar_count(&pending).await?));
        metrics.insert(
            "study_breakdown",
            MetricValue::Studies(engine.study_breakdown(study_id).await?),
        );

        let weeks = bucketing::last_n_weeks(request.as_of.date_naive(), config.weekly_trend_weeks);
        metrics.insert(
            "weekly_enrollment",
            MetricValue::Series(
                engine
                    .enrollment_series(weeks, Granularity::Week, study_id)
                    .await?
                    .into(),
            ),
        );

        metrics.insert(
            "pending_susars_list",
            MetricValue::Susars(
                engine
                    .recent_susars(
                        &pending.clone().sorted(SusarSort::OnsetDesc),
                        config.coordinator_list_size,
                    )
                    .await?,
            ),
        );
        metrics.insert(
            "recent_participants_list",
            MetricValue::Participants(
                engine
                    .recent_participants(&scope, config.coordinator_list_size)
                    .await?,
            ),
        );
        metrics.insert(
            "status_breakdown",
            MetricValue::Breakdown(
                engine
                    .participant_breakdown(ParticipantField::Status, &scope)
                    .await?,
            ),
        );
        metrics.insert(
            "completion_rate",
            MetricValue::Rate(engine.completion_rate(study_id).await?),
        );
        metrics.insert(
            "follow_up_compliance_rate",
            MetricValue::Rate(engine.follow_up_compliance_rate(&susar_scope).await?),
        );

        debug!(metrics = metrics.metrics.len(), "coordinator dashboard assembled");
        Ok(metrics)
    }

    /// Counts scoped to the calling user plus today's system-wide activity.
    #[instrument(skip(self, request), fields(as_of = %request.as_of, user_id = %request.user_id))]
    async fn staff_dashboard(&self, request: &DashboardRequest) -> ApiResult<DashboardMetrics> {
        let engine = &self.engine;
        let config = &self.config;
        let today = request.as_of.date_naive();
        let mine = ParticipantFilter::all().created_by(request.user_id);
        let my_recent_since = Self::days_before(request.as_of, config.my_recent_window_days);
        let everyone = ParticipantFilter::all();
        let pending = Self::pending_filter(&SusarFilter::all(), &config.staff_pending_outcomes);

        let mut metrics = DashboardMetrics::new(DashboardRole::Staff, request.as_of);

        metrics.insert(
            "my_participants",
            MetricValue::Count(engine.participant_count(&mine).await?),
        );
        metrics.insert(
            "my_recent_participants",
            MetricValue::Count(
                engine
                    .participant_count(&mine.clone().created_since(my_recent_since))
                    .await?,
            ),
        );
        metrics.insert(
            "participants_today",
            MetricValue::Count(
                engine
                    .participant_count(&everyone.clone().created_on(today))
                    .await?,
            ),
        );
        metrics.insert(
            "susars_today",
            MetricValue::Count(engine.susar_count(&SusarFilter::all().detected_on(today)).await?),
        );
        metrics.insert(
            "total_active",
            MetricValue::Count(
                engine
                    .participant_count(&everyone.clone().with_status(ParticipantStatus::Active))
                    .await?,
            ),
        );
        metrics.insert(
            "total_screening",
            MetricValue::Count(
                engine
                    .participant_count(&everyone.clone().with_status(ParticipantStatus::Screening))
                    .await?,
            ),
        );
        metrics.insert(
            "pending_followups",
            MetricValue::Count(engine.susar_count(&pending).await?),
        );

        metrics.insert(
            "my_recent_list",
            MetricValue::Participants(
                engine
                    .recent_participants(&mine, config.staff_list_size)
                    .await?,
            ),
        );
        metrics.insert(
            "recent_participants_list",
            MetricValue::Participants(
                engine
                    .recent_participants(&everyone, config.staff_system_list_size)
                    .await?,
            ),
        );
        metrics.insert(
            "recent_susars_list",
            MetricValue::Susars(
                engine
                    .recent_susars(&SusarFilter::all(), config.staff_system_list_size)
                    .await?,
            ),
        );
        metrics.insert(
            "study_breakdown",
            MetricValue::Studies(engine.study_breakdown(None).await?),
        );

        debug!(metrics = metrics.metrics.len(), "staff dashboard assembled");
        Ok(metrics)
    }

    /// Read-only subset. Participant rows are summaries without contact data.
    #[instrument(skip(self, request), fields(as_of = %request.as_of))]
    async fn viewer_dashboard(&self, request: &DashboardRequest) -> ApiResult<DashboardMetrics> {
        let engine = &self.engine;
        let everyone = ParticipantFilter::all();

        let mut metrics = DashboardMetrics::new(DashboardRole::Viewer, request.as_of);

        metrics.insert(
            "total_participants",
            MetricValue::Count(engine.participant_count(&everyone).await?),
        );
        metrics.insert(
            "active_participants",
            MetricValue::Count(
                engine
                    .participant_count(&everyone.clone().with_status(ParticipantStatus::Active))
                    .await?,
            ),
        );
        metrics.insert(
            "total_studies",
            MetricValue::Count(engine.study_count(&StudyFilter::all().active()).await?),
        );
        metrics.insert(
            "total_susars",
            MetricValue::Count(engine.susar_count(&SusarFilter::all()).await?),
        );
        metrics.insert(
            "study_breakdown",
            MetricValue::Studies(engine.study_breakdown(None).await?),
        );
        metrics.insert(
            "status_breakdown",
            MetricValue::Breakdown(
                engine
                    .participant_breakdown(ParticipantField::Status, &everyone)
                    .await?,
            ),
        );
        metrics.insert(
            "recent_participants_list",
            MetricValue::Participants(
                engine
                    .recent_participants(&everyone, self.config.viewer_list_size)
                    .await?,
            ),
        );

        debug!(metrics = metrics.metrics.len(), "viewer dashboard assembled");
        Ok(metrics)
    }

    /// Follow-up-required SUSARs whose outcome is still in `outcomes`
    fn pending_filter(scope: &SusarFilter, outcomes: &[SusarOutcome]) -> SusarFilter {
        scope.clone().follow_up_required().with_outcomes(outcomes)
    }
}

#[async_trait]
impl DashboardService for DashboardAssembler {
    async fn dashboard(&self, request: &DashboardRequest) -> ApiResult<DashboardMetrics> {
        match request.role {
            DashboardRole::Admin => self.admin_dashboard(request).await,
            DashboardRole::Coordinator => self.coordinator_dashboard(request).await,
            DashboardRole::Staff => self.staff_dashboard(request).await,
            DashboardRole::Viewer => self.viewer_dashboard(request).await,
        }
    }

    async fn enrollment_chart(&self, request: &TrendRequest) -> ApiResult<ChartSeries> {
        request.validate()?;
        let range = bucketing::last_n_months(request.as_of.date_naive(), request.months);
        let series = self
            .engine
            .enrollment_series(range, Granularity::Month, None)
            .await?;
        Ok(series.into())
    }

    async fn susar_chart(&self, request: &TrendRequest) -> ApiResult<ChartSeries> {
        request.validate()?;
        let range = bucketing::last_n_months(request.as_of.date_naive(), request.months);
        let series = self
            .engine
            .susar_onset_series(range, Granularity::Month, None)
            .await?;
        Ok(series.into())
    }

    async fn status_chart(&self) -> ApiResult<ChartSeries> {
        let groups = self
            .engine
            .participant_breakdown(ParticipantField::Status, &ParticipantFilter::all())
            .await?;
        let (labels, data): (Vec<String>, Vec<i64>) = groups
            .into_iter()
            .map(|group| (title_case(&group.key), group.count))
            .unzip();
        Ok(ChartSeries::new(labels, data))
    }
}

/// `not_recovered` -> `Not Recovered`
fn title_case(code: &str) -> String {
    code.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use chrono::TimeZone;
    use clintrack_api::ApiError;
    use rust_decimal::Decimal;

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 14, 15, 30, 0).unwrap()
    }

    /// Two studies, a handful of participants and SUSARs, one staff user with sessions
    fn seeded_store() -> (MemoryStore, Uuid, Uuid) {
        let store = MemoryStore::new();
        let study_a = store.add_study(study("STUDY-A"));
        let study_b = store.add_study(study("STUDY-B"));
        let staff = store.add_user(user("wanjiru", "staff"));

        for status in [
            ParticipantStatus::Completed,
            ParticipantStatus::Completed,
            ParticipantStatus::Active,
            ParticipantStatus::Active,
        ] {
            let mut p = participant(study_a.id, status);
            p.created_by = Some(staff.id);
            p.created_at = as_of() - Duration::days(2);
            p.enrollment_date = Some(as_of().date_naive() - Duration::days(2));
            store.add_participant(p);
        }
        let mut screening = participant(study_b.id, ParticipantStatus::Screening);
        screening.created_at = as_of() - Duration::hours(1);
        let screening = store.add_participant(screening);

        for (severity, outcome) in [
            (SusarSeverity::Fatal, SusarOutcome::Fatal),
            (SusarSeverity::Severe, SusarOutcome::Unknown),
            (SusarSeverity::Mild, SusarOutcome::Recovering),
            (SusarSeverity::Moderate, SusarOutcome::Recovered),
        ] {
            let mut s = susar(screening.id, severity, outcome);
            s.onset_date = as_of() - Duration::days(1);
            s.detection_date = as_of();
            s.created_at = as_of() - Duration::days(1);
            store.add_susar(s);
        }

        store.add_session(session_at(staff.id, as_of() - Duration::hours(5), Some(2)));
        store.add_session(session_at(staff.id, as_of() - Duration::hours(1), None));

        (store, study_a.id, staff.id)
    }

    #[tokio::test]
    async fn test_unknown_role_gets_admin_metric_set() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (store, _, user_id) = seeded_store();
        let assembler = DashboardAssembler::new(store.entity_store());

        let admin = assembler.dashboard_for_role("admin", user_id, None, as_of()).await?;
        let unknown = assembler.dashboard_for_role("data_manager", user_id, None, as_of()).await?;

        assert_eq!(unknown.role, DashboardRole::Admin);
        assert_eq!(unknown.user_role, "Administrator");
        assert_eq!(admin.metric_names(), unknown.metric_names());
        assert_eq!(admin.metrics, unknown.metrics);

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_dashboard() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (store, _, user_id) = seeded_store();
        let assembler = DashboardAssembler::new(store.entity_store());
        let metrics = assembler.dashboard(&DashboardRequest::new("admin", user_id, as_of())).await?;

        assert_eq!(metrics.count("total_participants"), Some(5));
        assert_eq!(metrics.count("active_participants"), Some(2));
        assert_eq!(metrics.count("total_studies"), Some(2));
        assert_eq!(metrics.count("total_susars"), Some(4));
        assert_eq!(metrics.count("critical_susars"), Some(2));
        assert_eq!(metrics.count("recent_participants"), Some(5));
        assert_eq!(metrics.rate("susar_resolution_rate"), Some(Decimal::new(250, 1)));
        assert_eq!(metrics.rate("average_session_hours"), Some(Decimal::new(20, 1)));
        assert_eq!(metrics.rate("follow_up_compliance_rate"), Some(Decimal::ZERO));

        let monthly = metrics.series("enrollment_trends").unwrap();
        assert_eq!(monthly.len(), 12);
        assert_eq!(monthly.labels.last().map(String::as_str), Some("Jun 2024"));
        assert_eq!(monthly.total(), 4);

        let daily = metrics.series("daily_susars").unwrap();
        assert_eq!(daily.len(), 30);
        assert_eq!(daily.total(), 4);

        let statuses = metrics.breakdown("status_breakdown").unwrap();
        assert_eq!(statuses[0].key, "active");
        assert_eq!(statuses[1].key, "completed");

        match metrics.get("staff_activity") {
            Some(MetricValue::Leaderboard(rows)) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].username, "wanjiru");
                assert_eq!(rows[0].login_count, 2);
            }
            other => panic!("unexpected staff_activity: {other:?}"),
        }
        match metrics.get("recent_participants_list") {
            Some(MetricValue::Participants(rows)) => assert_eq!(rows.len(), 5),
            other => panic!("unexpected recent_participants_list: {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_coordinator_dashboard_is_study_scoped() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (store, study_a, user_id) = seeded_store();
        let assembler = DashboardAssembler::new(store.entity_store());

        let scoped = assembler
            .dashboard(&DashboardRequest::new("coordinator", user_id, as_of()).with_study(study_a))
            .await?;
        assert_eq!(scoped.count("total_participants"), Some(4));
        assert_eq!(scoped.count("screening_participants"), Some(0));
        assert_eq!(scoped.count("total_susars"), Some(0));
        assert_eq!(scoped.rate("completion_rate"), Some(Decimal::new(500, 1)));
        assert_eq!(scoped.series("weekly_enrollment").map(ChartSeries::len), Some(8));
        assert_eq!(scoped.series("weekly_enrollment").map(ChartSeries::total), Some(4));
        match scoped.get("study_breakdown") {
            Some(MetricValue::Studies(rows)) => assert_eq!(rows.len(), 1),
            other => panic!("unexpected study_breakdown: {other:?}"),
        }

        let unscoped = assembler
            .dashboard(&DashboardRequest::new("coordinator", user_id, as_of()))
            .await?;
        // Recovering and unknown outcomes are pending, fatal and recovered are not
        assert_eq!(unscoped.count("pending_susars"), Some(2));
        assert_eq!(unscoped.count("total_participants"), Some(5));

        Ok(())
    }

    #[tokio::test]
    async fn test_staff_dashboard_is_caller_scoped() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (store, _, staff_id) = seeded_store();
        let assembler = DashboardAssembler::new(store.entity_store());

        let mine = assembler.dashboard(&DashboardRequest::new("staff", staff_id, as_of())).await?;
        assert_eq!(mine.count("my_participants"), Some(4));
        assert_eq!(mine.count("my_recent_participants"), Some(4));
        assert_eq!(mine.count("participants_today"), Some(1));
        assert_eq!(mine.count("susars_today"), Some(4));
        assert_eq!(mine.count("total_screening"), Some(1));
        // Only recovering counts as pending for staff
        assert_eq!(mine.count("pending_followups"), Some(1));

        let someone_else = assembler
            .dashboard(&DashboardRequest::new("staff", Uuid::new_v4(), as_of()))
            .await?;
        assert_eq!(someone_else.count("my_participants"), Some(0));
        assert_eq!(someone_else.count("total_active"), Some(2));

        Ok(())
    }

    #[tokio::test]
    async fn test_viewer_dashboard_is_a_read_only_subset() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (store, _, user_id) = seeded_store();
        let assembler = DashboardAssembler::new(store.entity_store());

        let metrics = assembler
            .dashboard(&DashboardRequest::new("viewer", user_id, as_of()))
            .await?;
        assert_eq!(
            metrics.metric_names(),
            vec![
                "active_participants",
                "recent_participants_list",
                "status_breakdown",
                "study_breakdown",
                "total_participants",
                "total_studies",
                "total_susars",
            ]
        );

        let json = serde_json::to_value(&metrics)?;
        let row = &json["metrics"]["recent_participants_list"][0];
        assert!(row.get("participant_code").is_some());
        assert!(row.get("first_name").is_none());
        assert!(row.get("location").is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_pending_outcomes_are_configurable() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (store, _, user_id) = seeded_store();
        let config = DashboardConfig {
            coordinator_pending_outcomes: vec![SusarOutcome::Fatal],
            ..DashboardConfig::default()
        };
        let assembler = DashboardAssembler::with_config(store.entity_store(), config)?;

        let metrics = assembler
            .dashboard(&DashboardRequest::new("coordinator", user_id, as_of()))
            .await?;
        assert_eq!(metrics.count("pending_susars"), Some(1));

        Ok(())
    }

    #[test]
    fn test_out_of_range_config_is_rejected() {
        let store = MemoryStore::new();
        let config: DashboardConfig =
            serde_json::from_str(r#"{"weekly_trend_weeks": 4294967295}"#).unwrap();

        let result = DashboardAssembler::with_config(store.entity_store(), config);
        assert!(matches!(result, Err(ApiError::ValidationError(_))));

        let config = DashboardConfig {
            recent_window_days: -30,
            ..DashboardConfig::default()
        };
        let result = DashboardAssembler::with_config(store.entity_store(), config);
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_chart_endpoints() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (store, _, _) = seeded_store();
        let assembler = DashboardAssembler::new(store.entity_store());

        let enrollment = assembler.enrollment_chart(&TrendRequest::new(6, as_of())).await?;
        assert_eq!(enrollment.labels.first().map(String::as_str), Some("Jan 2024"));
        assert_eq!(enrollment.data, vec![0, 0, 0, 0, 0, 4]);

        let susars = assembler.susar_chart(&TrendRequest::new(1, as_of())).await?;
        assert_eq!(susars.data, vec![4]);

        let status = assembler.status_chart().await?;
        assert_eq!(status.labels, vec!["Active", "Completed", "Screening"]);
        assert_eq!(status.data, vec![2, 2, 1]);

        Ok(())
    }

    #[tokio::test]
    async fn test_chart_months_are_validated() {
        let (store, _, _) = seeded_store();
        let assembler = DashboardAssembler::new(store.entity_store());

        for months in [0, 121] {
            let result = assembler.enrollment_chart(&TrendRequest::new(months, as_of())).await;
            assert!(matches!(result, Err(ApiError::ValidationError(_))));
        }
    }

    #[tokio::test]
    async fn test_store_failure_fails_the_render() {
        let assembler = DashboardAssembler::new(MemoryStore::failing().entity_store());

        for role in ["admin", "coordinator", "staff", "viewer"] {
            let result = assembler
                .dashboard(&DashboardRequest::new(role, Uuid::new_v4(), as_of()))
                .await;
            assert!(matches!(result, Err(ApiError::DatabaseError(_))));
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("active"), "Active");
        assert_eq!(title_case("not_recovered"), "Not Recovered");
        assert_eq!(title_case(""), "");
    }
}
