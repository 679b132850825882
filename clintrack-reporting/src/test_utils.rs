//! In-memory store and fixtures shared by the reporting tests.

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use clintrack_api::GroupCount;
use clintrack_db::{
    AttendanceFilter, AttendanceStore, AuditLogModel, AuditLogStore, EntityStore,
    Gender, PageRequest, ParticipantField, ParticipantFilter, ParticipantModel, ParticipantStatus,
    ParticipantStore, SessionDurationTotals, StaffAttendanceModel, StudyFilter, StudyModel,
    StudyStore, SusarField, SusarFilter, SusarModel, SusarOutcome, SusarSeverity, SusarSort,
    SusarStore, UserModel, UserStore,
};
use heapless::String as HeaplessString;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

type StoreResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

pub fn hstr<const N: usize>(value: &str) -> HeaplessString<N> {
    HeaplessString::try_from(value).unwrap()
}

#[derive(Default)]
struct MemoryData {
    participants: Vec<ParticipantModel>,
    studies: Vec<StudyModel>,
    susars: Vec<SusarModel>,
    attendance: Vec<StaffAttendanceModel>,
    audit_logs: Vec<AuditLogModel>,
    users: Vec<UserModel>,
}

#[derive(Default)]
pub struct MemoryBackend {
    data: RwLock<MemoryData>,
    failing: bool,
}

impl MemoryBackend {
    fn check(&self) -> StoreResult<()> {
        if self.failing {
            return Err("store unavailable".into());
        }
        Ok(())
    }

    fn participant_studies(data: &MemoryData) -> HashMap<Uuid, Uuid> {
        data.participants.iter().map(|p| (p.id, p.study_id)).collect()
    }

    fn matching_susars(&self, filter: &SusarFilter) -> StoreResult<Vec<SusarModel>> {
        self.check()?;
        let data = self.data.read();
        let studies = Self::participant_studies(&data);
        let mut susars: Vec<SusarModel> = data
            .susars
            .iter()
            .filter(|s| filter.matches(s, studies.get(&s.participant_id).copied()))
            .cloned()
            .collect();
        match filter.sort {
            SusarSort::CreatedDesc => susars.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SusarSort::OnsetDesc => susars.sort_by(|a, b| b.onset_date.cmp(&a.onset_date)),
        }
        Ok(susars)
    }

    fn matching_participants(
        &self,
        filter: &ParticipantFilter,
    ) -> StoreResult<Vec<ParticipantModel>> {
        self.check()?;
        let data = self.data.read();
        let mut participants: Vec<ParticipantModel> = data
            .participants
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        participants.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(participants)
    }

    fn matching_sessions(
        &self,
        filter: &AttendanceFilter,
    ) -> StoreResult<Vec<StaffAttendanceModel>> {
        self.check()?;
        let data = self.data.read();
        let mut sessions: Vec<StaffAttendanceModel> = data
            .attendance
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.login_time.cmp(&a.login_time));
        Ok(sessions)
    }
}

fn group(keys: impl IntoIterator<Item = String>) -> Vec<GroupCount> {
    let mut counts: HashMap<String, i64> = HashMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }
    counts.into_iter().map(|(key, count)| GroupCount { key, count }).collect()
}

#[async_trait]
impl ParticipantStore for MemoryBackend {
    async fn find_participants(
        &self,
        filter: &ParticipantFilter,
        page: Option<PageRequest>,
    ) -> StoreResult<Vec<ParticipantModel>> {
        let participants = self.matching_participants(filter)?;
        Ok(match page {
            Some(page) => page.apply(participants),
            None => participants,
        })
    }

    async fn count_participants(&self, filter: &ParticipantFilter) -> StoreResult<i64> {
        Ok(self.matching_participants(filter)?.len() as i64)
    }

    async fn count_participants_by(
        &self,
        field: ParticipantField,
        filter: &ParticipantFilter,
    ) -> StoreResult<Vec<GroupCount>> {
        let participants = self.matching_participants(filter)?;
        Ok(group(participants.iter().map(|p| match field {
            ParticipantField::Status => p.status.as_str().to_string(),
            ParticipantField::Gender => p.gender.as_str().to_string(),
            ParticipantField::Location => p.location.to_string(),
            ParticipantField::Study => p.study_id.to_string(),
        })))
    }
}

#[async_trait]
impl StudyStore for MemoryBackend {
    async fn find_studies(&self, filter: &StudyFilter) -> StoreResult<Vec<StudyModel>> {
        self.check()?;
        let mut studies: Vec<StudyModel> = self
            .data
            .read()
            .studies
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();
        studies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(studies)
    }

    async fn count_studies(&self, filter: &StudyFilter) -> StoreResult<i64> {
        Ok(self.find_studies(filter).await?.len() as i64)
    }
}

#[async_trait]
impl SusarStore for MemoryBackend {
    async fn find_susars(
        &self,
        filter: &SusarFilter,
        page: Option<PageRequest>,
    ) -> StoreResult<Vec<SusarModel>> {
        let susars = self.matching_susars(filter)?;
        Ok(match page {
            Some(page) => page.apply(susars),
            None => susars,
        })
    }

    async fn count_susars(&self, filter: &SusarFilter) -> StoreResult<i64> {
        Ok(self.matching_susars(filter)?.len() as i64)
    }

    async fn count_susars_by(
        &self,
        field: SusarField,
        filter: &SusarFilter,
    ) -> StoreResult<Vec<GroupCount>> {
        let susars = self.matching_susars(filter)?;
        let studies = Self::participant_studies(&self.data.read());
        Ok(group(susars.iter().filter_map(|s| match field {
            SusarField::Severity => Some(s.severity.as_str().to_string()),
            SusarField::Outcome => Some(s.outcome.as_str().to_string()),
            SusarField::Study => studies.get(&s.participant_id).map(Uuid::to_string),
        })))
    }
}

#[async_trait]
impl AttendanceStore for MemoryBackend {
    async fn find_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> StoreResult<Vec<StaffAttendanceModel>> {
        self.matching_sessions(filter)
    }

    async fn login_counts_by_staff(
        &self,
        filter: &AttendanceFilter,
    ) -> StoreResult<Vec<(Uuid, i64)>> {
        let mut counts: HashMap<Uuid, i64> = HashMap::new();
        for session in self.matching_sessions(filter)? {
            *counts.entry(session.staff_id).or_default() += 1;
        }
        Ok(counts.into_iter().collect())
    }

    async fn session_duration_totals(
        &self,
        filter: &AttendanceFilter,
    ) -> StoreResult<SessionDurationTotals> {
        Ok(SessionDurationTotals::from_sessions(&self.matching_sessions(filter)?))
    }

    async fn record_login(
        &self,
        attendance: StaffAttendanceModel,
    ) -> StoreResult<StaffAttendanceModel> {
        self.check()?;
        self.data.write().attendance.push(attendance.clone());
        Ok(attendance)
    }

    async fn close_latest_session(
        &self,
        staff_id: Uuid,
        logout_time: DateTime<Utc>,
    ) -> StoreResult<Option<StaffAttendanceModel>> {
        self.check()?;
        let mut data = self.data.write();
        let latest = data
            .attendance
            .iter_mut()
            .filter(|a| a.staff_id == staff_id && a.is_open())
            .max_by_key(|a| a.login_time);
        Ok(latest.map(|session| {
            session.logout_time = Some(logout_time);
            session.clone()
        }))
    }
}

#[async_trait]
impl AuditLogStore for MemoryBackend {
    async fn append_audit(&self, entry: AuditLogModel) -> StoreResult<AuditLogModel> {
        self.check()?;
        self.data.write().audit_logs.push(entry.clone());
        Ok(entry)
    }

    async fn find_audit_entries(
        &self,
        page: PageRequest,
    ) -> StoreResult<Vec<AuditLogModel>> {
        self.check()?;
        let mut entries: Vec<AuditLogModel> = self.data.read().audit_logs.clone();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(page.apply(entries))
    }
}

#[async_trait]
impl UserStore for MemoryBackend {
    async fn load_users(&self, ids: &[Uuid]) -> StoreResult<Vec<Option<UserModel>>> {
        self.check()?;
        let data = self.data.read();
        Ok(ids
            .iter()
            .map(|id| data.users.iter().find(|u| u.id == *id).cloned())
            .collect())
    }
}

/// Test handle over a [`MemoryBackend`]. Rows added after an
/// [`EntityStore`] was handed out are visible through it.
#[derive(Clone, Default)]
pub struct MemoryStore {
    backend: Arc<MemoryBackend>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails
    pub fn failing() -> Self {
        Self {
            backend: Arc::new(MemoryBackend {
                data: RwLock::new(MemoryData::default()),
                failing: true,
            }),
        }
    }

    pub fn entity_store(&self) -> EntityStore {
        EntityStore::from_shared(self.backend.clone())
    }

    pub fn add_study(&self, study: StudyModel) -> StudyModel {
        self.backend.data.write().studies.push(study.clone());
        study
    }

    pub fn add_participant(&self, participant: ParticipantModel) -> ParticipantModel {
        self.backend.data.write().participants.push(participant.clone());
        participant
    }

    pub fn add_susar(&self, susar: SusarModel) -> SusarModel {
        self.backend.data.write().susars.push(susar.clone());
        susar
    }

    pub fn add_session(&self, session: StaffAttendanceModel) -> StaffAttendanceModel {
        self.backend.data.write().attendance.push(session.clone());
        session
    }

    pub fn add_audit(&self, entry: AuditLogModel) -> AuditLogModel {
        self.backend.data.write().audit_logs.push(entry.clone());
        entry
    }

    pub fn add_user(&self, user: UserModel) -> UserModel {
        self.backend.data.write().users.push(user.clone());
        user
    }

    pub fn sessions(&self) -> Vec<StaffAttendanceModel> {
        self.backend.data.read().attendance.clone()
    }

    pub fn audit_entries(&self) -> Vec<AuditLogModel> {
        self.backend.data.read().audit_logs.clone()
    }
}

pub fn study(code: &str) -> StudyModel {
    study_between(code, None, None)
}

pub fn study_between(
    code: &str,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> StudyModel {
    StudyModel {
        id: Uuid::new_v4(),
        code: hstr(code),
        name: hstr(&format!("{code} Trial")),
        description: None,
        start_date,
        end_date,
        is_active: true,
        created_at: Utc::now(),
    }
}

pub fn participant(study_id: Uuid, status: ParticipantStatus) -> ParticipantModel {
    let id = Uuid::new_v4();
    let now = Utc::now();
    ParticipantModel {
        id,
        participant_code: hstr(&format!("P-{}", &id.simple().to_string()[..8])),
        study_id,
        first_name: hstr("Amani"),
        last_name: hstr("Otieno"),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12),
        gender: Gender::Unspecified,
        location: hstr("Kilifi"),
        county: None,
        status,
        enrollment_date: None,
        created_by: None,
        created_at: now,
        updated_at: now,
    }
}

/// Active participant enrolled on `date`
pub fn enrolled(study_id: Uuid, date: NaiveDate) -> ParticipantModel {
    let mut p = participant(study_id, ParticipantStatus::Active);
    p.enrollment_date = Some(date);
    p
}

/// Follow-up-required SUSAR without notes, with onset and creation now
pub fn susar(participant_id: Uuid, severity: SusarSeverity, outcome: SusarOutcome) -> SusarModel {
    let id = Uuid::new_v4();
    let now = Utc::now();
    SusarModel {
        id,
        susar_code: hstr(&format!("S-{}", &id.simple().to_string()[..8])),
        participant_id,
        event_description: "Elevated liver enzymes".to_string(),
        onset_date: now,
        detection_date: now,
        severity,
        outcome,
        is_related_to_study: false,
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

/// Session starting at `login_time`, closed after `hours` when given
pub fn session_at(
    staff_id: Uuid,
    login_time: DateTime<Utc>,
    hours: Option<i64>,
) -> StaffAttendanceModel {
    StaffAttendanceModel {
        id: Uuid::new_v4(),
        staff_id,
        login_time,
        logout_time: hours.map(|h| login_time + Duration::hours(h)),
        location: None,
        ip_address: None,
    }
}

pub fn session_hours(staff_id: Uuid, hours: Option<i64>) -> StaffAttendanceModel {
    session_at(staff_id, Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap(), hours)
}

pub fn user(username: &str, role: &str) -> UserModel {
    UserModel {
        id: Uuid::new_v4(),
        username: hstr(username),
        first_name: hstr(username),
        last_name: hstr("Tester"),
        role: hstr(role),
        created_at: Utc::now(),
    }
}
