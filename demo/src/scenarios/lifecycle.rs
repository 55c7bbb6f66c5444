//! Scenario 1: Complaint Lifecycle
//!
//! A citizen files a pothole complaint; an officer takes it under review and
//! later resolves it.  Each transition is committed to the chain before it is
//! acknowledged (the strong-consistency integration policy), and the full
//! chain is verified at the end.

use serde_json::json;

use sgrs_audit::{AuditCore, InMemoryChainStore};
use sgrs_contracts::{
    complaint::{
        generate_complaint_id, ComplaintCategory, ComplaintStatus, ACTION_CREATED,
        ACTION_UPDATED,
    },
    error::AuditResult,
    record::{Details, StateChange},
};

const COMPLAINT_PK: i64 = 7;
const CITIZEN: i64 = 3;
const OFFICER: i64 = 9;

pub fn run_scenario() -> AuditResult<()> {
    println!("── Scenario 1: Complaint Lifecycle ────────────────────────────");

    let core = AuditCore::new(InMemoryChainStore::new());
    let reference = generate_complaint_id();
    println!("Citizen {CITIZEN} files complaint {reference} (\"Pothole on 5th Avenue\")");

    // Filing: first link of the chain, no previous state.
    let created = core.append(&StateChange {
        entity_id: COMPLAINT_PK,
        actor_id: CITIZEN,
        action_type: ACTION_CREATED.to_string(),
        previous_state: None,
        new_state: Some(ComplaintStatus::Submitted.to_string()),
        details: details(&[
            ("title", json!("Pothole on 5th Avenue")),
            ("category", json!(ComplaintCategory::Roads.as_str())),
            ("reference", json!(reference)),
        ]),
        origin: "10.0.0.1".to_string(),
    })?;
    println!(
        "  [0] {} → {}   hash {}…",
        ACTION_CREATED,
        ComplaintStatus::Submitted,
        &created.sequence_hash[..12]
    );

    // Officer triage.
    let reviewed = core.append(&StateChange {
        entity_id: COMPLAINT_PK,
        actor_id: OFFICER,
        action_type: ACTION_UPDATED.to_string(),
        previous_state: Some(ComplaintStatus::Submitted.to_string()),
        new_state: Some(ComplaintStatus::UnderReview.to_string()),
        details: details(&[("updated_by", json!("officer@ward12.gov"))]),
        origin: "10.0.0.2".to_string(),
    })?;
    println!(
        "  [1] {} → {}   hash {}…  links {}…",
        ACTION_UPDATED,
        ComplaintStatus::UnderReview,
        &reviewed.sequence_hash[..12],
        &reviewed.previous_hash[..12]
    );

    // Resolution.
    let resolved = core.append(&StateChange {
        entity_id: COMPLAINT_PK,
        actor_id: OFFICER,
        action_type: ACTION_UPDATED.to_string(),
        previous_state: Some(ComplaintStatus::UnderReview.to_string()),
        new_state: Some(ComplaintStatus::Resolved.to_string()),
        details: details(&[
            ("updated_by", json!("officer@ward12.gov")),
            ("resolution", json!("patched 2026-08-20")),
        ]),
        origin: "10.0.0.2".to_string(),
    })?;
    println!(
        "  [2] {} → {}   hash {}…  links {}…",
        ACTION_UPDATED,
        ComplaintStatus::Resolved,
        &resolved.sequence_hash[..12],
        &resolved.previous_hash[..12]
    );

    let valid = core.verify(COMPLAINT_PK)?;
    println!("Chain verification: {}", if valid { "INTACT" } else { "TAMPERED" });
    assert!(valid, "an untouched chain must verify");
    println!();

    Ok(())
}

fn details(pairs: &[(&str, serde_json::Value)]) -> Details {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}
