//! Complaint-domain vocabulary used by integration callers.
//!
//! The audit core itself is label-agnostic: it hashes whatever state strings
//! it is given.  These types exist so the surrounding grievance application
//! (routers, dashboards, the demo) agrees on one vocabulary for
//! `previous_state` / `new_state` labels and action tags.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Action tag recorded when a complaint is first filed.
pub const ACTION_CREATED: &str = "CREATED";

/// Action tag recorded when a complaint's fields or status change.
pub const ACTION_UPDATED: &str = "UPDATED";

/// Lifecycle status of a complaint.
///
/// The snake_case serialization doubles as the state label written into
/// audit records, so the wire form and the hashed form are the same string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Submitted,
    UnderReview,
    InProgress,
    PendingCitizenInput,
    Resolved,
    Closed,
    Escalated,
    Rejected,
}

impl ComplaintStatus {
    /// The stable label used in audit records and APIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Submitted => "submitted",
            ComplaintStatus::UnderReview => "under_review",
            ComplaintStatus::InProgress => "in_progress",
            ComplaintStatus::PendingCitizenInput => "pending_citizen_input",
            ComplaintStatus::Resolved => "resolved",
            ComplaintStatus::Closed => "closed",
            ComplaintStatus::Escalated => "escalated",
            ComplaintStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service category a complaint falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintCategory {
    WaterSupply,
    GarbageCollection,
    StreetLights,
    Roads,
    Drainage,
    HealthServices,
    Other,
}

impl ComplaintCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintCategory::WaterSupply => "water_supply",
            ComplaintCategory::GarbageCollection => "garbage_collection",
            ComplaintCategory::StreetLights => "street_lights",
            ComplaintCategory::Roads => "roads",
            ComplaintCategory::Drainage => "drainage",
            ComplaintCategory::HealthServices => "health_services",
            ComplaintCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for ComplaintCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Triage priority assigned to a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl ComplaintPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintPriority::Critical => "critical",
            ComplaintPriority::High => "high",
            ComplaintPriority::Medium => "medium",
            ComplaintPriority::Low => "low",
        }
    }
}

impl std::fmt::Display for ComplaintPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generate a citizen-facing complaint reference in the form
/// `SGRS-YYYY-MM-XXXXX`, where `XXXXX` is five random digits.
///
/// References are display identifiers, not primary keys — collisions are
/// resolved by the application's unique index, not here.
pub fn generate_complaint_id() -> String {
    let now = Utc::now();
    let digits = uuid::Uuid::new_v4().as_u128() % 100_000;
    format!("SGRS-{}-{:02}-{:05}", now.year(), now.month(), digits)
}
