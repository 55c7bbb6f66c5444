//! # sgrs-contracts
//!
//! Shared types and error definitions for the SGRS audit chain.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod complaint;
pub mod error;
pub mod record;
pub mod report;

#[cfg(test)]
mod tests {
    use super::*;
    use complaint::{ComplaintCategory, ComplaintPriority, ComplaintStatus};
    use error::AuditError;
    use report::{ChainFault, ChainReport, FaultKind};

    // ── Complaint vocabulary ─────────────────────────────────────────────────

    #[test]
    fn status_serializes_as_snake_case_label() {
        let json = serde_json::to_string(&ComplaintStatus::PendingCitizenInput).unwrap();
        assert_eq!(json, "\"pending_citizen_input\"");
    }

    #[test]
    fn status_round_trips() {
        for status in [
            ComplaintStatus::Submitted,
            ComplaintStatus::UnderReview,
            ComplaintStatus::InProgress,
            ComplaintStatus::PendingCitizenInput,
            ComplaintStatus::Resolved,
            ComplaintStatus::Closed,
            ComplaintStatus::Escalated,
            ComplaintStatus::Rejected,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let decoded: ComplaintStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(status, decoded);
        }
    }

    #[test]
    fn status_display_matches_serde_form() {
        // The hashed state label and the wire form must be the same string.
        let json = serde_json::to_string(&ComplaintStatus::UnderReview).unwrap();
        assert_eq!(json.trim_matches('"'), ComplaintStatus::UnderReview.as_str());
    }

    #[test]
    fn category_and_priority_labels() {
        assert_eq!(ComplaintCategory::StreetLights.as_str(), "street_lights");
        assert_eq!(ComplaintPriority::Critical.as_str(), "critical");
    }

    #[test]
    fn complaint_id_format() {
        let id = complaint::generate_complaint_id();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 4, "expected SGRS-YYYY-MM-XXXXX, got {id}");
        assert_eq!(parts[0], "SGRS");
        assert_eq!(parts[1].len(), 4);
        assert_eq!(parts[2].len(), 2);
        assert_eq!(parts[3].len(), 5);
        assert!(parts[3].chars().all(|c| c.is_ascii_digit()));
    }

    // ── Error display messages ───────────────────────────────────────────────

    #[test]
    fn error_storage_display() {
        let err = AuditError::Storage {
            reason: "connection refused".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("chain store error"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn error_conflict_display() {
        let err = AuditError::Conflict { entity_id: 42 };
        let msg = err.to_string();
        assert!(msg.contains("conflict"));
        assert!(msg.contains("42"));
    }

    // ── ChainReport ──────────────────────────────────────────────────────────

    #[test]
    fn report_validity() {
        let intact = ChainReport {
            entity_id: 7,
            records_checked: 3,
            fault: None,
        };
        assert!(intact.is_valid());

        let faulted = ChainReport {
            entity_id: 7,
            records_checked: 2,
            fault: Some(ChainFault {
                position: 1,
                kind: FaultKind::HashMismatch,
            }),
        };
        assert!(!faulted.is_valid());
    }
}
