use clintrack_db::EntityStore;
use postgres_unit_of_work::{Executor, UnitOfWorkSession};
use std::error::Error;
use std::sync::Arc;
use tracing::debug;

use super::{
    AttendanceRepositoryImpl, AuditLogRepositoryImpl, ParticipantRepositoryImpl,
    StudyRepositoryImpl, SusarRepositoryImpl, UserRepositoryImpl,
};

/// Factory for the ClinTrack repositories
///
/// The repositories hold no caches, so the factory is stateless. All
/// repositories built together share one executor and therefore one
/// transaction.
#[derive(Default)]
pub struct ClinTrackRepoFactory {}

impl ClinTrackRepoFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    /// Build all repositories on the session's executor
    pub fn build_all_repos(&self, session: &impl UnitOfWorkSession) -> ClinTrackRepositories {
        Self::build_with_executor(session.executor().clone())
    }

    pub fn build_with_executor(executor: Executor) -> ClinTrackRepositories {
        ClinTrackRepositories {
            participant_repository: Arc::new(ParticipantRepositoryImpl::new(executor.clone())),
            study_repository: Arc::new(StudyRepositoryImpl::new(executor.clone())),
            susar_repository: Arc::new(SusarRepositoryImpl::new(executor.clone())),
            attendance_repository: Arc::new(AttendanceRepositoryImpl::new(executor.clone())),
            audit_log_repository: Arc::new(AuditLogRepositoryImpl::new(executor.clone())),
            user_repository: Arc::new(UserRepositoryImpl::new(executor.clone())),
            executor,
        }
    }
}

/// Container for all repositories sharing one transaction
pub struct ClinTrackRepositories {
    pub executor: Executor,
    pub participant_repository: Arc<ParticipantRepositoryImpl>,
    pub study_repository: Arc<StudyRepositoryImpl>,
    pub susar_repository: Arc<SusarRepositoryImpl>,
    pub attendance_repository: Arc<AttendanceRepositoryImpl>,
    pub audit_log_repository: Arc<AuditLogRepositoryImpl>,
    pub user_repository: Arc<UserRepositoryImpl>,
}

impl ClinTrackRepositories {
    /// Store handle for the reporting layer, backed by these repositories
    pub fn entity_store(&self) -> EntityStore {
        EntityStore {
            participants: self.participant_repository.clone(),
            studies: self.study_repository.clone(),
            susars: self.susar_repository.clone(),
            attendance: self.attendance_repository.clone(),
            audit_logs: self.audit_log_repository.clone(),
            users: self.user_repository.clone(),
        }
    }

    /// Commit the shared transaction. Repositories cannot be used afterwards.
    pub async fn commit(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let transaction = self
            .executor
            .tx
            .lock()
            .await
            .take()
            .ok_or("Transaction has been consumed")?;
        transaction.commit().await?;
        debug!("Committed repository transaction");
        Ok(())
    }
}
