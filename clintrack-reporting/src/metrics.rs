//! Pure metric formulas over entity subsets.
//!
//! Every rate and average goes through [`safe_divide`], so an empty input
//! always yields its documented default instead of an error. Results are
//! rounded to one decimal place.

use clintrack_api::GroupCount;
use clintrack_db::{SessionDurationTotals, StudyModel, SusarModel};
use rust_decimal::Decimal;

const SECONDS_PER_HOUR: i64 = 3_600;

/// `numerator / denominator`, or `default` when the denominator is zero
/// or the quotient does not fit.
pub fn safe_divide(numerator: Decimal, denominator: Decimal, default: Decimal) -> Decimal {
    if denominator.is_zero() {
        return default;
    }
    numerator.checked_div(denominator).unwrap_or(default)
}

/// `part / whole * 100` rounded to one decimal, 0 when `whole` is 0
pub fn safe_percentage(part: i64, whole: i64) -> Decimal {
    let scaled = Decimal::from(part) * Decimal::ONE_HUNDRED;
    safe_divide(scaled, Decimal::from(whole), Decimal::ZERO).round_dp(1)
}

/// Order groups largest first, breaking ties by key.
pub fn sort_breakdown(mut groups: Vec<GroupCount>) -> Vec<GroupCount> {
    groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    groups
}

/// Share of a study's participants whose status is `completed`
pub fn completion_rate(completed: i64, total: i64) -> Decimal {
    safe_percentage(completed, total)
}

/// Share of SUSARs that ended recovered, with or without sequelae
pub fn resolution_rate(susars: &[SusarModel]) -> Decimal {
    let resolved = susars.iter().filter(|s| s.outcome.is_resolved()).count();
    safe_percentage(resolved as i64, susars.len() as i64)
}

/// Share of follow-up-required SUSARs that carry follow-up notes
pub fn follow_up_compliance_rate(susars: &[SusarModel]) -> Decimal {
    let (required, documented) = susars
        .iter()
        .filter(|s| s.follow_up_required)
        .fold((0i64, 0i64), |(required, documented), susar| {
            (required + 1, documented + i64::from(susar.has_follow_up_notes()))
        });
    safe_percentage(documented, required)
}

/// Month-over-month change in percent.
///
/// With no previous activity, any current activity is reported as 100 and
/// none as 0.
pub fn growth_rate(previous: i64, current: i64) -> Decimal {
    if previous == 0 {
        return if current > 0 {
            Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
    }
    safe_percentage(current - previous, previous)
}

/// Mean closed-session length in hours
pub fn average_session_hours(totals: SessionDurationTotals) -> Decimal {
    safe_divide(
        Decimal::from(totals.total_seconds),
        Decimal::from(totals.closed_sessions) * Decimal::from(SECONDS_PER_HOUR),
        Decimal::ZERO,
    )
    .round_dp(1)
}

/// Mean planned duration in days over studies with both dates set
pub fn average_study_duration_days(studies: &[StudyModel]) -> Decimal {
    let (qualifying, total_days) = studies
        .iter()
        .filter_map(StudyModel::duration_days)
        .fold((0i64, 0i64), |(n, total), days| (n + 1, total + days));
    safe_divide(Decimal::from(total_days), Decimal::from(qualifying), Decimal::ZERO).round_dp(1)
}
