use chrono::{DateTime, Utc};
use clintrack_api::DashboardRole;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserModel {
    pub id: Uuid,
    pub username: HeaplessString<150>,
    pub first_name: HeaplessString<150>,
    pub last_name: HeaplessString<150>,
    /// Raw role string as stored; see [`UserModel::dashboard_role`]
    pub role: HeaplessString<20>,
    pub created_at: DateTime<Utc>,
}

impl UserModel {
    pub fn dashboard_role(&self) -> DashboardRole {
        DashboardRole::from_role(&self.role)
    }
}

impl Identifiable for UserModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
