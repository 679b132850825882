use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::role::DashboardRole;

/// One row of a category breakdown: the group value and how many records carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    pub key: String,
    pub count: i64,
}

impl GroupCount {
    pub fn new(key: impl Into<String>, count: i64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// Chart-ready series made of parallel label and value sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<i64>,
}

impl ChartSeries {
    pub fn new(labels: Vec<String>, data: Vec<i64>) -> Self {
        Self { labels, data }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Sum of all values in the series
    pub fn total(&self) -> i64 {
        self.data.iter().sum()
    }
}

/// Per-study participant and SUSAR counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySummary {
    pub study_id: Uuid,
    pub code: String,
    pub name: String,
    pub is_active: bool,
    pub participant_count: i64,
    pub active_count: i64,
    pub screening_count: i64,
    pub susar_count: i64,
    pub completion_rate: Decimal,
}

/// Login count of one staff member over the activity window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffActivity {
    pub user_id: Uuid,
    pub username: String,
    pub login_count: i64,
}

/// Participant row for recent-entity lists. Contact details are never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSummary {
    pub id: Uuid,
    pub participant_code: String,
    pub study_id: Uuid,
    pub status: String,
    pub enrollment_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SusarSummary {
    pub id: Uuid,
    pub susar_code: String,
    pub participant_id: Uuid,
    pub severity: String,
    pub outcome: String,
    pub onset_date: DateTime<Utc>,
    pub follow_up_required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntrySummary {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub action: String,
    pub model_name: String,
    pub object_id: String,
    pub timestamp: DateTime<Utc>,
}

/// A single named dashboard value.
///
/// Serialized untagged so that a scalar renders as a JSON number, a breakdown
/// as an array of `{key, count}` objects and a series as `{labels, data}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(i64),
    Rate(Decimal),
    Breakdown(Vec<GroupCount>),
    Series(ChartSeries),
    Studies(Vec<StudySummary>),
    Leaderboard(Vec<StaffActivity>),
    Participants(Vec<ParticipantSummary>),
    Susars(Vec<SusarSummary>),
    AuditEntries(Vec<AuditEntrySummary>),
}

/// Flat mapping of metric name to value produced by one dashboard render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub role: DashboardRole,
    pub user_role: &'static str,
    pub generated_at: DateTime<Utc>,
    pub metrics: BTreeMap<String, MetricValue>,
}

impl DashboardMetrics {
    pub fn new(role: DashboardRole, generated_at: DateTime<Utc>) -> Self {
        Self {
            role,
            user_role: role.label(),
            generated_at,
            metrics: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, value: MetricValue) {
        self.metrics.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&MetricValue> {
        self.metrics.get(name)
    }

    /// Metric names in sorted order
    pub fn metric_names(&self) -> Vec<&str> {
        self.metrics.keys().map(String::as_str).collect()
    }

    pub fn count(&self, name: &str) -> Option<i64> {
        match self.metrics.get(name) {
            Some(MetricValue::Count(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn rate(&self, name: &str) -> Option<Decimal> {
        match self.metrics.get(name) {
            Some(MetricValue::Rate(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn series(&self, name: &str) -> Option<&ChartSeries> {
        match self.metrics.get(name) {
            Some(MetricValue::Series(series)) => Some(series),
            _ => None,
        }
    }

    pub fn breakdown(&self, name: &str) -> Option<&[GroupCount]> {
        match self.metrics.get(name) {
            Some(MetricValue::Breakdown(groups)) => Some(groups),
            _ => None,
        }
    }
}
