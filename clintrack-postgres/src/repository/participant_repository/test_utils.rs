#[cfg(test)]
pub mod test_utils {
    use chrono::Utc;
    use clintrack_db::{Gender, ParticipantModel, ParticipantStatus};
    use heapless::String as HeaplessString;
    use postgres_unit_of_work::Executor;
    use uuid::Uuid;

    pub fn create_test_participant(study_id: Uuid, status: ParticipantStatus) -> ParticipantModel {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let code = format!("P-{}", &id.simple().to_string()[..12]);
        ParticipantModel {
            id,
            participant_code: HeaplessString::try_from(code.as_str()).unwrap(),
            study_id,
            first_name: HeaplessString::try_from("Achieng").unwrap(),
            last_name: HeaplessString::try_from("Mwangi").unwrap(),
            date_of_birth: None,
            gender: Gender::Unspecified,
            location: HeaplessString::try_from("Kisumu").unwrap(),
            county: None,
            status,
            enrollment_date: None,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub async fn insert_participant(
        executor: &Executor,
        participant: &ParticipantModel,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO participant (
                id, participant_code, study_id, first_name, last_name, date_of_birth, gender,
                location, county, status, enrollment_date, created_by, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(participant.id)
        .bind(participant.participant_code.as_str())
        .bind(participant.study_id)
        .bind(participant.first_name.as_str())
        .bind(participant.last_name.as_str())
        .bind(participant.date_of_birth)
        .bind(participant.gender)
        .bind(participant.location.as_str())
        .bind(participant.county.as_ref().map(|c| c.as_str()))
        .bind(participant.status)
        .bind(participant.enrollment_date)
        .bind(participant.created_by)
        .bind(participant.created_at)
        .bind(participant.updated_at);

        let mut tx = executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        query.execute(&mut **transaction).await?;
        Ok(())
    }
}
