use clintrack_db::UserModel;
use crate::utils::{log_query_error, TryFromRow};
use std::collections::HashMap;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    pub(super) async fn load_users_impl(
        repo: &UserRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<Vec<Option<UserModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = r#"SELECT * FROM app_user WHERE id = ANY($1)"#;
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(query)
                .bind(ids)
                .fetch_all(&mut **transaction)
                .await
                .map_err(log_query_error("load_users"))?
        };

        let mut item_map = HashMap::new();
        for row in rows {
            let item = UserModel::try_from_row(&row)?;
            item_map.insert(item.id, item);
        }

        let mut result = Vec::with_capacity(ids.len());
        for id in ids {
            result.push(item_map.remove(id));
        }
        Ok(result)
    }
}
