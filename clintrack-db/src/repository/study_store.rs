use async_trait::async_trait;
use std::error::Error;

use crate::models::StudyModel;
use crate::repository::filter::StudyFilter;

/// Read access to the study collection
#[async_trait]
pub trait StudyStore: Send + Sync {
    /// Studies matching `filter`, ordered by name
    async fn find_studies(
        &self,
        filter: &StudyFilter,
    ) -> Result<Vec<StudyModel>, Box<dyn Error + Send + Sync>>;

    async fn count_studies(
        &self,
        filter: &StudyFilter,
    ) -> Result<i64, Box<dyn Error + Send + Sync>>;
}
