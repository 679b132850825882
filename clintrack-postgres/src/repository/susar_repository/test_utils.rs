#[cfg(test)]
pub mod test_utils {
    use chrono::Utc;
    use clintrack_db::{SusarModel, SusarOutcome, SusarSeverity};
    use heapless::String as HeaplessString;
    use postgres_unit_of_work::Executor;
    use uuid::Uuid;

    /// Follow-up-required SUSAR with onset and detection now
    pub fn create_test_susar(
        participant_id: Uuid,
        severity: SusarSeverity,
        outcome: SusarOutcome,
    ) -> SusarModel {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let code = format!("S-{}", &id.simple().to_string()[..12]);
        SusarModel {
            id,
            susar_code: HeaplessString::try_from(code.as_str()).unwrap(),
            participant_id,
            event_description: "Grade 3 neutropenia".to_string(),
            onset_date: now,
            detection_date: now,
            severity,
            outcome,
            is_related_to_study: true,
            hospitalization_required: false,
            reported_to_irb: false,
            irb_report_date: None,
            reported_to_sponsor: false,
            sponsor_report_date: None,
            follow_up_required: true,
            follow_up_notes: None,
            reported_by: None,
            created_at: now,
        }
    }

    pub async fn insert_susar(
        executor: &Executor,
        susar: &SusarModel,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO susar (
                id, susar_code, participant_id, event_description, onset_date, detection_date,
                severity, outcome, is_related_to_study, hospitalization_required,
                reported_to_irb, irb_report_date, reported_to_sponsor, sponsor_report_date,
                follow_up_required, follow_up_notes, reported_by, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            "#,
        )
        .bind(susar.id)
        .bind(susar.susar_code.as_str())
        .bind(susar.participant_id)
        .bind(&susar.event_description)
        .bind(susar.onset_date)
        .bind(susar.detection_date)
        .bind(susar.severity)
        .bind(susar.outcome)
        .bind(susar.is_related_to_study)
        .bind(susar.hospitalization_required)
        .bind(susar.reported_to_irb)
        .bind(susar.irb_report_date)
        .bind(susar.reported_to_sponsor)
        .bind(susar.sponsor_report_date)
        .bind(susar.follow_up_required)
        .bind(susar.follow_up_notes.as_deref())
        .bind(susar.reported_by)
        .bind(susar.created_at);

        let mut tx = executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        query.execute(&mut **transaction).await?;
        Ok(())
    }
}
