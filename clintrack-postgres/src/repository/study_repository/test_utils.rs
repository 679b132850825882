#[cfg(test)]
pub mod test_utils {
    use chrono::{NaiveDate, Utc};
    use clintrack_db::StudyModel;
    use heapless::String as HeaplessString;
    use postgres_unit_of_work::Executor;
    use uuid::Uuid;

    /// Active study; `code` doubles as a unique name
    pub fn create_test_study(code: &str) -> StudyModel {
        StudyModel {
            id: Uuid::new_v4(),
            code: HeaplessString::try_from(code).unwrap(),
            name: HeaplessString::try_from(format!("{code} Trial").as_str()).unwrap(),
            description: Some("Test study".to_string()),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    pub async fn insert_study(
        executor: &Executor,
        study: &StudyModel,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO study
                (id, code, name, description, start_date, end_date, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(study.id)
        .bind(study.code.as_str())
        .bind(study.name.as_str())
        .bind(study.description.as_deref())
        .bind(study.start_date)
        .bind(study.end_date)
        .bind(study.is_active)
        .bind(study.created_at);

        let mut tx = executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        query.execute(&mut **transaction).await?;
        Ok(())
    }
}
