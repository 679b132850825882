use clintrack_db::SusarOutcome;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Windows and list sizes used when assembling dashboards.
///
/// Every field has a default, so a partial JSON/TOML document only needs to
/// name the values it overrides. Deserializing does not check bounds; the
/// assembler runs [`Validate::validate`] before accepting a config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DashboardConfig {
    /// Window for "recently created" participant and SUSAR counts
    #[validate(range(min = 1, max = 3650))]
    pub recent_window_days: i64,
    /// Window for the staff login leaderboard
    #[validate(range(min = 1, max = 3650))]
    pub staff_activity_window_days: i64,
    /// Window for a staff member's own recent registrations
    #[validate(range(min = 1, max = 3650))]
    pub my_recent_window_days: i64,

    #[validate(range(min = 1, max = 120))]
    pub trend_months: u32,
    #[validate(range(min = 1, max = 366))]
    pub daily_trend_days: u32,
    #[validate(range(min = 1, max = 520))]
    pub weekly_trend_weeks: u32,

    #[validate(range(min = 1, max = 1000))]
    pub leaderboard_size: usize,
    #[validate(range(min = 1, max = 1000))]
    pub top_locations: usize,
    #[validate(range(min = 1, max = 1000))]
    pub audit_list_size: usize,
    #[validate(range(min = 1, max = 1000))]
    pub admin_list_size: usize,
    #[validate(range(min = 1, max = 1000))]
    pub coordinator_list_size: usize,
    #[validate(range(min = 1, max = 1000))]
    pub staff_list_size: usize,
    #[validate(range(min = 1, max = 1000))]
    pub staff_system_list_size: usize,
    #[validate(range(min = 1, max = 1000))]
    pub viewer_list_size: usize,

    /// Outcomes that keep a follow-up SUSAR pending on the coordinator dashboard
    #[validate(length(min = 1))]
    pub coordinator_pending_outcomes: Vec<SusarOutcome>,
    /// Outcomes that keep a follow-up SUSAR pending on the staff dashboard
    #[validate(length(min = 1))]
    pub staff_pending_outcomes: Vec<SusarOutcome>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_window_days: 30,
            staff_activity_window_days: 7,
            my_recent_window_days: 7,
            trend_months: 12,
            daily_trend_days: 30,
            weekly_trend_weeks: 8,
            leaderboard_size: 10,
            top_locations: 10,
            audit_list_size: 10,
            admin_list_size: 5,
            coordinator_list_size: 10,
            staff_list_size: 10,
            staff_system_list_size: 5,
            viewer_list_size: 10,
            coordinator_pending_outcomes: vec![
                SusarOutcome::Recovering,
                SusarOutcome::NotRecovered,
                SusarOutcome::Unknown,
            ],
            staff_pending_outcomes: vec![SusarOutcome::Recovering, SusarOutcome::NotRecovered],
        }
    }
}
