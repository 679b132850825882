use async_trait::async_trait;
use std::error::Error;
use uuid::Uuid;

use crate::models::UserModel;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Load users by id. Returns items in the same order as `ids`,
    /// with `None` for ids that do not exist.
    async fn load_users(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<UserModel>>, Box<dyn Error + Send + Sync>>;
}
