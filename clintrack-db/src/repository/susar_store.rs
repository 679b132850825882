use async_trait::async_trait;
use clintrack_api::GroupCount;
use std::error::Error;

use crate::models::SusarModel;
use crate::repository::filter::SusarFilter;
use crate::repository::pagination::PageRequest;

/// SUSAR column a grouped count can be keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SusarField {
    Severity,
    Outcome,
    /// Study of the reporting participant
    Study,
}

/// Read access to the SUSAR collection
#[async_trait]
pub trait SusarStore: Send + Sync {
    /// SUSARs matching `filter`, in the order given by `filter.sort`
    async fn find_susars(
        &self,
        filter: &SusarFilter,
        page: Option<PageRequest>,
    ) -> Result<Vec<SusarModel>, Box<dyn Error + Send + Sync>>;

    async fn count_susars(
        &self,
        filter: &SusarFilter,
    ) -> Result<i64, Box<dyn Error + Send + Sync>>;

    async fn count_susars_by(
        &self,
        field: SusarField,
        filter: &SusarFilter,
    ) -> Result<Vec<GroupCount>, Box<dyn Error + Send + Sync>>;
}
