#[cfg(test)]
pub mod test_utils {
    use chrono::Utc;
    use clintrack_db::UserModel;
    use heapless::String as HeaplessString;
    use postgres_unit_of_work::Executor;
    use uuid::Uuid;

    /// `username` gets a random suffix so repeated runs never collide
    pub fn create_test_user(username: &str, role: &str) -> UserModel {
        let id = Uuid::new_v4();
        let unique = format!("{username}_{}", &id.simple().to_string()[..8]);
        UserModel {
            id,
            username: HeaplessString::try_from(unique.as_str()).unwrap(),
            first_name: HeaplessString::try_from("Test").unwrap(),
            last_name: HeaplessString::try_from("User").unwrap(),
            role: HeaplessString::try_from(role).unwrap(),
            created_at: Utc::now(),
        }
    }

    pub async fn insert_user(
        executor: &Executor,
        user: &UserModel,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO app_user (id, username, first_name, last_name, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id)
        .bind(user.username.as_str())
        .bind(user.first_name.as_str())
        .bind(user.last_name.as_str())
        .bind(user.role.as_str())
        .bind(user.created_at);

        let mut tx = executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        query.execute(&mut **transaction).await?;
        Ok(())
    }
}
