use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard variant selected for a user role.
///
/// Role strings are an open set. Anything that is not one of the four known
/// values resolves to [`DashboardRole::Admin`], the same fallback the role
/// dispatcher has always used. Deserialization applies the same fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DashboardRole {
    Admin,
    Coordinator,
    Staff,
    Viewer,
}

impl DashboardRole {
    /// Parse a role string, returning `None` for unrecognized values.
    pub fn parse(role: &str) -> Option<Self> {
        match role {
            "admin" => Some(DashboardRole::Admin),
            "coordinator" => Some(DashboardRole::Coordinator),
            "staff" => Some(DashboardRole::Staff),
            "viewer" => Some(DashboardRole::Viewer),
            _ => None,
        }
    }

    /// Resolve a role string, falling back to `Admin` for unknown roles.
    pub fn from_role(role: &str) -> Self {
        Self::parse(role).unwrap_or(DashboardRole::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardRole::Admin => "admin",
            DashboardRole::Coordinator => "coordinator",
            DashboardRole::Staff => "staff",
            DashboardRole::Viewer => "viewer",
        }
    }

    /// Human readable label shown in dashboard headers.
    pub fn label(&self) -> &'static str {
        match self {
            DashboardRole::Admin => "Administrator",
            DashboardRole::Coordinator => "Study Coordinator",
            DashboardRole::Staff => "Research Staff",
            DashboardRole::Viewer => "Viewer",
        }
    }
}

impl From<String> for DashboardRole {
    fn from(role: String) -> Self {
        Self::from_role(&role)
    }
}

impl fmt::Display for DashboardRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
