use async_trait::async_trait;
use clintrack_db::{UserModel, UserStore};
use crate::utils::{get_heapless_string, TryFromRow};
use postgres_unit_of_work::Executor;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use uuid::Uuid;

pub struct UserRepositoryImpl {
    pub executor: Executor,
}

impl UserRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl UserStore for UserRepositoryImpl {
    async fn load_users(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<UserModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_users_impl(self, ids).await
    }
}

impl TryFromRow<PgRow> for UserModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(UserModel {
            id: row.try_get("id")?,
            username: get_heapless_string(row, "username")?,
            first_name: get_heapless_string(row, "first_name")?,
            last_name: get_heapless_string(row, "last_name")?,
            role: get_heapless_string(row, "role")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
