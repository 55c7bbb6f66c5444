//! Scenario 3: Append Contention
//!
//! Twenty request handlers append to the same complaint simultaneously.  The
//! conditional write serializes them: every writer lands exactly once, and
//! the result is a single valid chain rather than a fork.

use std::sync::Arc;

use serde_json::json;

use sgrs_audit::{AuditCore, ChainStore, InMemoryChainStore};
use sgrs_contracts::{
    complaint::{ComplaintStatus, ACTION_UPDATED},
    error::AuditResult,
    record::StateChange,
};

const COMPLAINT_PK: i64 = 42;
const WRITERS: i64 = 20;

pub fn run_scenario() -> AuditResult<()> {
    println!("── Scenario 3: Append Contention ──────────────────────────────");
    println!("{WRITERS} concurrent handlers appending to complaint {COMPLAINT_PK}…");

    let core = Arc::new(AuditCore::new(InMemoryChainStore::new()));

    let handles: Vec<_> = (0..WRITERS)
        .map(|actor_id| {
            let core = Arc::clone(&core);
            std::thread::spawn(move || {
                core.append(&StateChange {
                    entity_id: COMPLAINT_PK,
                    actor_id,
                    action_type: ACTION_UPDATED.to_string(),
                    previous_state: Some(ComplaintStatus::Submitted.to_string()),
                    new_state: Some(ComplaintStatus::UnderReview.to_string()),
                    details: [("comment".to_string(), json!(format!("note from {actor_id}")))]
                        .into_iter()
                        .collect(),
                    origin: format!("10.0.1.{actor_id}"),
                })
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .expect("writer thread panicked")?;
    }

    let records = core.store().fetch_all(COMPLAINT_PK)?;
    let valid = core.verify(COMPLAINT_PK)?;

    println!("Records appended: {} (expected {WRITERS})", records.len());
    println!("Chain verification: {}", if valid { "INTACT" } else { "FORKED" });
    assert_eq!(records.len() as i64, WRITERS, "no append may be lost");
    assert!(valid, "concurrent appends must serialize into one chain");
    println!();

    Ok(())
}
