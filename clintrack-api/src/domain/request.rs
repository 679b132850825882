use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::role::DashboardRole;

/// Input for a single dashboard render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub role: DashboardRole,
    /// The acting user, used for caller-scoped staff metrics
    pub user_id: Uuid,
    /// Restricts coordinator breakdowns to one study
    pub study_id: Option<Uuid>,
    /// Reference instant all relative windows are computed from
    pub as_of: DateTime<Utc>,
}

impl DashboardRequest {
    /// Build a request from a raw role string. Unknown roles resolve to admin.
    pub fn new(role: &str, user_id: Uuid, as_of: DateTime<Utc>) -> Self {
        Self {
            role: DashboardRole::from_role(role),
            user_id,
            study_id: None,
            as_of,
        }
    }

    pub fn with_study(mut self, study_id: Uuid) -> Self {
        self.study_id = Some(study_id);
        self
    }
}

/// Input for the monthly trend chart endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TrendRequest {
    #[validate(range(min = 1, max = 120))]
    pub months: u32,
    pub as_of: DateTime<Utc>,
}

impl TrendRequest {
    pub const DEFAULT_MONTHS: u32 = 12;

    pub fn new(months: u32, as_of: DateTime<Utc>) -> Self {
        Self { months, as_of }
    }
}
