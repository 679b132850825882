use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Participant lifecycle status. Any value may be set at any time;
/// there is no enforced transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "participant_status", rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum ParticipantStatus {
    Screening,
    Active,
    Completed,
    Withdrawn,
    Lost,
}

impl ParticipantStatus {
    pub const ALL: [ParticipantStatus; 5] = [
        ParticipantStatus::Screening,
        ParticipantStatus::Active,
        ParticipantStatus::Completed,
        ParticipantStatus::Withdrawn,
        ParticipantStatus::Lost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantStatus::Screening => "screening",
            ParticipantStatus::Active => "active",
            ParticipantStatus::Completed => "completed",
            ParticipantStatus::Withdrawn => "withdrawn",
            ParticipantStatus::Lost => "lost",
        }
    }
}

impl fmt::Display for ParticipantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParticipantStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "screening" => Ok(ParticipantStatus::Screening),
            "active" => Ok(ParticipantStatus::Active),
            "completed" => Ok(ParticipantStatus::Completed),
            "withdrawn" => Ok(ParticipantStatus::Withdrawn),
            "lost" => Ok(ParticipantStatus::Lost),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "gender"))]
pub enum Gender {
    #[serde(rename = "M")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "M"))]
    Male,
    #[serde(rename = "F")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "F"))]
    Female,
    #[serde(rename = "O")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "O"))]
    Other,
    #[serde(rename = "U")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "U"))]
    Unspecified,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other => "O",
            Gender::Unspecified => "U",
        }
    }
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            "O" => Ok(Gender::Other),
            "U" => Ok(Gender::Unspecified),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "susar_severity", rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum SusarSeverity {
    Mild,
    Moderate,
    Severe,
    LifeThreatening,
    Fatal,
}

impl SusarSeverity {
    /// Severities counted as critical on the administrator dashboard
    pub const CRITICAL: [SusarSeverity; 3] = [
        SusarSeverity::Severe,
        SusarSeverity::LifeThreatening,
        SusarSeverity::Fatal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SusarSeverity::Mild => "mild",
            SusarSeverity::Moderate => "moderate",
            SusarSeverity::Severe => "severe",
            SusarSeverity::LifeThreatening => "life_threatening",
            SusarSeverity::Fatal => "fatal",
        }
    }
}

impl FromStr for SusarSeverity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mild" => Ok(SusarSeverity::Mild),
            "moderate" => Ok(SusarSeverity::Moderate),
            "severe" => Ok(SusarSeverity::Severe),
            "life_threatening" => Ok(SusarSeverity::LifeThreatening),
            "fatal" => Ok(SusarSeverity::Fatal),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "susar_outcome", rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum SusarOutcome {
    Recovered,
    Recovering,
    NotRecovered,
    RecoveredSequelae,
    Fatal,
    Unknown,
}

impl SusarOutcome {
    /// Outcomes that count towards the resolution rate
    pub const RESOLVED: [SusarOutcome; 2] =
        [SusarOutcome::Recovered, SusarOutcome::RecoveredSequelae];

    pub fn as_str(&self) -> &'static str {
        match self {
            SusarOutcome::Recovered => "recovered",
            SusarOutcome::Recovering => "recovering",
            SusarOutcome::NotRecovered => "not_recovered",
            SusarOutcome::RecoveredSequelae => "recovered_sequelae",
            SusarOutcome::Fatal => "fatal",
            SusarOutcome::Unknown => "unknown",
        }
    }

    pub fn is_resolved(&self) -> bool {
        Self::RESOLVED.contains(self)
    }
}

impl FromStr for SusarOutcome {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recovered" => Ok(SusarOutcome::Recovered),
            "recovering" => Ok(SusarOutcome::Recovering),
            "not_recovered" => Ok(SusarOutcome::NotRecovered),
            "recovered_sequelae" => Ok(SusarOutcome::RecoveredSequelae),
            "fatal" => Ok(SusarOutcome::Fatal),
            "unknown" => Ok(SusarOutcome::Unknown),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "audit_action", rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    View,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "create",
            AuditAction::Update => "update",
            AuditAction::Delete => "delete",
            AuditAction::View => "view",
        }
    }
}

impl FromStr for AuditAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(AuditAction::Create),
            "update" => Ok(AuditAction::Update),
            "delete" => Ok(AuditAction::Delete),
            "view" => Ok(AuditAction::View),
            _ => Err(()),
        }
    }
}
