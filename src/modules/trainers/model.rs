//! Trainer-application entities and the submission state machine.
//!
//! An application moves `pending -> verified | rejected`. At most one
//! application document exists per email; a rejected application does not
//! block a fresh submission, which replaces it.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Verified,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Verified => "verified",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn parse(status: &str) -> Option<ApplicationStatus> {
        match status {
            "pending" => Some(ApplicationStatus::Pending),
            "verified" => Some(ApplicationStatus::Verified),
            "rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }
}

/// What a new submission should do given the caller's existing
/// application, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// No blocking application: insert (replacing a rejected one).
    Insert,
    /// A verified application exists; the caller is already a trainer.
    AlreadyTrainer,
    /// A pending application exists; await admin review.
    AlreadyRequested,
}

pub fn submit_decision(existing: Option<ApplicationStatus>) -> SubmitDecision {
    match existing {
        Some(ApplicationStatus::Verified) => SubmitDecision::AlreadyTrainer,
        Some(ApplicationStatus::Pending) => SubmitDecision::AlreadyRequested,
        Some(ApplicationStatus::Rejected) | None => SubmitDecision::Insert,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TrainerApplication {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub image: Option<String>,
    pub biography: Option<String>,
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub available_days: Vec<String>,
    pub available_time: Option<String>,
    pub age: Option<i32>,
    pub status: String,
    pub feedback: Option<String>,
    pub applied_at: chrono::DateTime<chrono::Utc>,
}

/// Projection for the public team strip.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TeamTrainer {
    pub id: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub biography: Option<String>,
    pub skills: Vec<String>,
    pub experience: Option<String>,
}

/// Projection for the admin trainers dashboard.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TrainerSummary {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrainerRequestDto {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub image: Option<String>,
    pub biography: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience: Option<String>,
    #[serde(default)]
    pub available_days: Vec<String>,
    pub available_time: Option<String>,
    pub age: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ApproveApplicationDto {
    #[validate(email)]
    pub email: String,
}

/// Admin rejection. Carries the reviewed profile alongside the verdict so
/// any field the admin edited lands in the record; absent fields keep
/// their stored values.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RejectApplicationDto {
    #[validate(email)]
    pub email: String,
    pub feedback: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub biography: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<String>,
    pub available_days: Option<Vec<String>>,
    pub available_time: Option<String>,
    pub age: Option<i32>,
}
