use async_trait::async_trait;

use crate::domain::{ChartSeries, DashboardMetrics, DashboardRequest, TrendRequest};
use crate::error::ApiResult;

/// Read-only reporting surface consumed by the presentation layer.
///
/// Every call is independent and stateless. A failure in any underlying
/// store query fails the whole call; no partial results are returned.
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Assemble the metric set for the role carried by `request`
    async fn dashboard(&self, request: &DashboardRequest) -> ApiResult<DashboardMetrics>;

    /// Monthly enrollment counts over the requested number of months
    async fn enrollment_chart(&self, request: &TrendRequest) -> ApiResult<ChartSeries>;

    /// Monthly SUSAR onset counts over the requested number of months
    async fn susar_chart(&self, request: &TrendRequest) -> ApiResult<ChartSeries>;

    /// Participant status distribution, largest group first
    async fn status_chart(&self) -> ApiResult<ChartSeries>;
}
