//! View Models
//!
//! Flat records backing the list and profile views. Cross-entity
//! references are denormalized display strings (a case stores its
//! client's name, not a key into the client table).

use serde::{Deserialize, Serialize};

/// Service user / client record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
    pub status: ClientStatus,
    pub support_types: Vec<String>,
    pub safeguarding_flag: bool,
    pub last_contact: String,
    pub assigned_staff: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Active,
    Pending,
    Inactive,
}

impl ClientStatus {
    pub fn label(self) -> &'static str {
        match self {
            ClientStatus::Active => "active",
            ClientStatus::Pending => "pending",
            ClientStatus::Inactive => "inactive",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ClientStatus::Active => "badge badge-default",
            ClientStatus::Pending => "badge badge-destructive",
            ClientStatus::Inactive => "badge badge-secondary",
        }
    }
}

/// Volunteer roster record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub dbs_status: DbsStatus,
    pub dbs_expiry: String,
    pub training_complete: bool,
    pub availability: Vec<String>,
    pub assigned_cases: u32,
    pub hours_this_month: u32,
    pub location: String,
    pub joined_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbsStatus {
    Current,
    Pending,
    Expired,
}

impl DbsStatus {
    pub fn label(self) -> &'static str {
        match self {
            DbsStatus::Current => "current",
            DbsStatus::Pending => "pending",
            DbsStatus::Expired => "expired",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            DbsStatus::Current => "badge badge-default",
            DbsStatus::Pending => "badge badge-destructive",
            DbsStatus::Expired => "badge badge-secondary",
        }
    }
}

/// Case record shown in the case list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: String,
    pub title: String,
    pub client_name: String,
    pub assigned_staff: String,
    pub assigned_volunteer: Option<String>,
    pub status: CaseStatus,
    pub priority: Priority,
    pub case_types: Vec<String>,
    pub opened_date: String,
    pub last_update: String,
    pub next_action: String,
    pub notes_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStatus {
    Open,
    InProgress,
    Closed,
    Urgent,
}

impl CaseStatus {
    pub fn label(self) -> &'static str {
        match self {
            CaseStatus::Open => "open",
            CaseStatus::InProgress => "in progress",
            CaseStatus::Closed => "closed",
            CaseStatus::Urgent => "urgent",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            CaseStatus::Open => "badge badge-secondary",
            CaseStatus::InProgress => "badge badge-default",
            CaseStatus::Closed => "badge badge-outline",
            CaseStatus::Urgent => "badge badge-destructive",
        }
    }
}

/// Shared low/medium/high/urgent scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Priority::Low => "badge badge-secondary",
            Priority::Medium => "badge badge-accent",
            Priority::High => "badge badge-warning",
            Priority::Urgent => "badge badge-destructive",
        }
    }
}

/// Rapid response log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RapidResponse {
    pub id: String,
    pub client_name: String,
    pub request_type: String,
    pub description: String,
    pub requested_by: String,
    pub assigned_to: String,
    pub status: ResponseStatus,
    pub priority: Priority,
    pub request_time: String,
    pub response_time: Option<String>,
    pub completed_time: Option<String>,
    pub outcome: Option<String>,
    pub follow_up_required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl ResponseStatus {
    pub fn label(self) -> &'static str {
        match self {
            ResponseStatus::Pending => "pending",
            ResponseStatus::InProgress => "in progress",
            ResponseStatus::Completed => "completed",
            ResponseStatus::Cancelled => "cancelled",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ResponseStatus::Pending => "badge badge-destructive",
            ResponseStatus::InProgress => "badge badge-default",
            ResponseStatus::Completed => "badge badge-secondary",
            ResponseStatus::Cancelled => "badge badge-outline",
        }
    }
}

/// Safeguarding incident record (restricted section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeguardingIncident {
    pub id: String,
    pub client_name: String,
    pub incident_type: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub reported_by: String,
    pub reported_date: String,
    pub assigned_to: String,
    pub description: String,
    pub action_taken: Option<String>,
    pub referral_made: bool,
    pub review_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Severity::Low => "badge badge-secondary",
            Severity::Medium => "badge badge-accent",
            Severity::High => "badge badge-warning",
            Severity::Critical => "badge badge-destructive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentStatus {
    Reported,
    Investigating,
    ActionTaken,
    Closed,
}

impl IncidentStatus {
    pub fn label(self) -> &'static str {
        match self {
            IncidentStatus::Reported => "reported",
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::ActionTaken => "action taken",
            IncidentStatus::Closed => "closed",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            IncidentStatus::Reported => "badge badge-destructive",
            IncidentStatus::Investigating => "badge badge-default",
            IncidentStatus::ActionTaken => "badge badge-secondary",
            IncidentStatus::Closed => "badge badge-outline",
        }
    }
}

/// Advocacy action record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvocacyAction {
    pub id: String,
    pub client_name: String,
    pub advocacy_type: String,
    pub description: String,
    pub target_organization: String,
    pub assigned_to: String,
    pub status: AdvocacyStatus,
    pub priority: Priority,
    pub start_date: String,
    pub last_action: String,
    pub next_action: Option<String>,
    pub outcome: Option<String>,
    pub documents_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvocacyStatus {
    Pending,
    InProgress,
    Completed,
    Escalated,
}

impl AdvocacyStatus {
    pub fn label(self) -> &'static str {
        match self {
            AdvocacyStatus::Pending => "pending",
            AdvocacyStatus::InProgress => "in progress",
            AdvocacyStatus::Completed => "completed",
            AdvocacyStatus::Escalated => "escalated",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            AdvocacyStatus::Pending => "badge badge-secondary",
            AdvocacyStatus::InProgress => "badge badge-default",
            AdvocacyStatus::Completed => "badge badge-outline",
            AdvocacyStatus::Escalated => "badge badge-destructive",
        }
    }
}

/// System account shown in settings user management
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub last_login: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Staff,
    Volunteer,
}

impl UserRole {
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Staff => "staff",
            UserRole::Volunteer => "volunteer",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            UserRole::Admin => "badge badge-destructive",
            UserRole::Staff => "badge badge-default",
            UserRole::Volunteer => "badge badge-secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            UserStatus::Active => "badge badge-default",
            UserStatus::Inactive => "badge badge-secondary",
        }
    }
}

// ========================
// Profile detail records
// ========================

/// Case reference shown on a client profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseSummary {
    pub id: String,
    pub title: String,
    pub status: CaseStatus,
    pub created: String,
}

/// Full client profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientDetail {
    pub client: Client,
    pub join_date: String,
    pub emergency_contact: String,
    pub notes: String,
    pub recent_cases: Vec<CaseSummary>,
    pub health_conditions: Vec<String>,
    pub preferences: Vec<String>,
}

/// Dated activity entry on a volunteer profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub activity: String,
    pub date: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub date: String,
    pub description: String,
}

/// Full volunteer profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerDetail {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub status: UserStatus,
    pub skills: Vec<String>,
    pub availability: Vec<String>,
    pub dbs_status: DbsStatus,
    pub dbs_expiry: String,
    pub join_date: String,
    pub total_hours: u32,
    pub current_cases: u32,
    pub rating: f32,
    pub languages: Vec<String>,
    pub qualifications: Vec<String>,
    pub interests: Vec<String>,
    pub notes: String,
    pub recent_activities: Vec<ActivityLogEntry>,
    pub achievements: Vec<Achievement>,
}

/// Timeline note on a case profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressNote {
    pub date: String,
    pub note: String,
    pub author: String,
}

/// Scheduled follow-up on a case profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedAction {
    pub action: String,
    pub due: String,
    pub assignee: String,
}

/// Full case profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseDetail {
    pub id: String,
    pub title: String,
    pub client_name: String,
    pub client_id: String,
    pub volunteer_name: String,
    pub volunteer_id: String,
    pub status: CaseStatus,
    pub priority: Priority,
    pub created: String,
    pub last_update: String,
    pub description: String,
    pub objectives: Vec<String>,
    pub progress: Vec<ProgressNote>,
    pub next_actions: Vec<PlannedAction>,
}
