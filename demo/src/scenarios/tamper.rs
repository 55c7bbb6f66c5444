//! Scenario 2: Out-of-Band Tampering
//!
//! An "administrator" edits a stored record directly in the store — the kind
//! of change an ORM-level UPDATE or a manual database edit would make,
//! bypassing the audit core entirely.  Verification catches it and names the
//! exact position and check that failed.

use serde_json::json;

use sgrs_audit::{AuditCore, InMemoryChainStore};
use sgrs_contracts::{
    complaint::{ComplaintStatus, ACTION_CREATED, ACTION_UPDATED},
    error::AuditResult,
    record::{Details, StateChange},
    report::FaultKind,
};

const COMPLAINT_PK: i64 = 11;

pub fn run_scenario() -> AuditResult<()> {
    println!("── Scenario 2: Out-of-Band Tampering ──────────────────────────");

    let store = InMemoryChainStore::new();
    let core = AuditCore::new(store.clone());

    // A short real history: filed, then rejected by an officer.
    core.append(&event(3, ACTION_CREATED, None, ComplaintStatus::Submitted))?;
    core.append(&event(
        9,
        ACTION_UPDATED,
        Some(ComplaintStatus::Submitted),
        ComplaintStatus::Rejected,
    ))?;

    println!("History: CREATED → submitted, UPDATED → rejected");
    println!("Verification before edit: {}", label(core.verify(COMPLAINT_PK)?));

    // The cover-up: rewrite the rejection into a resolution, directly in
    // storage, without going through the audit core.
    store.mutate(COMPLAINT_PK, 1, |record| {
        record.new_state = Some(ComplaintStatus::Resolved.to_string());
        record.details.insert("resolution".to_string(), json!("handled promptly"));
    });
    println!("An insider edits record 1 in storage: rejected → resolved");

    let report = core.verify_report(COMPLAINT_PK)?;
    println!("Verification after edit:  {}", label(report.is_valid()));
    match report.fault {
        Some(fault) => {
            let check = match fault.kind {
                FaultKind::HashMismatch => "sequence hash mismatch",
                FaultKind::BrokenLink => "broken link pointer",
            };
            println!("  first fault at position {} ({check})", fault.position);
        }
        None => println!("  (unexpectedly intact)"),
    }
    assert!(!report.is_valid(), "the edit must be detected");
    println!();

    Ok(())
}

fn event(
    actor_id: i64,
    action_type: &str,
    previous: Option<ComplaintStatus>,
    new: ComplaintStatus,
) -> StateChange {
    StateChange {
        entity_id: COMPLAINT_PK,
        actor_id,
        action_type: action_type.to_string(),
        previous_state: previous.map(|s| s.to_string()),
        new_state: Some(new.to_string()),
        details: Details::new(),
        origin: "10.0.0.1".to_string(),
    }
}

fn label(valid: bool) -> &'static str {
    if valid {
        "INTACT"
    } else {
        "TAMPERED"
    }
}
