//! The audit core: chain append and chain verification.
//!
//! `AuditCore` is a synchronous library invoked inline by request-handling
//! code.  It owns no threads and performs no background work; concurrency
//! safety comes from the store's conditional write plus the bounded retry
//! loop in `append`.

use tracing::{debug, warn};

use sgrs_contracts::{
    error::{AuditError, AuditResult},
    record::{AuditRecord, PendingRecord, StateChange},
    report::{ChainFault, ChainReport, FaultKind},
};

use crate::{hash::sequence_hash, store::ChainStore};

/// Default bound on read-compute-write attempts under append contention.
///
/// High enough that a burst of concurrent writers to one entity always
/// drains (each round commits at least one writer), low enough that a
/// misbehaving store cannot livelock a request handler.
pub const DEFAULT_MAX_APPEND_ATTEMPTS: u32 = 64;

/// The tamper-evident audit log for tracked entities.
///
/// Takes its [`ChainStore`] at construction — there is no ambient global
/// instance.  All methods borrow `&self`, so one core can be shared across
/// request handlers behind an `Arc`.
pub struct AuditCore<S: ChainStore> {
    store: S,
    max_append_attempts: u32,
}

impl<S: ChainStore> AuditCore<S> {
    /// Create a core over `store` with the default append-retry bound.
    pub fn new(store: S) -> Self {
        Self {
            store,
            max_append_attempts: DEFAULT_MAX_APPEND_ATTEMPTS,
        }
    }

    /// Override the append-retry bound.  Must be at least 1.
    pub fn with_max_attempts(store: S, max_append_attempts: u32) -> Self {
        Self {
            store,
            max_append_attempts: max_append_attempts.max(1),
        }
    }

    /// Access the underlying store (read paths, administrative tooling).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record one state change as a new link in the entity's hash chain.
    ///
    /// Fetches the current chain tail, computes the new record's
    /// `sequence_hash` over its canonical content concatenated with the
    /// tail's hash (empty string for a fresh chain), and commits it with a
    /// conditional write.  When a concurrent append wins the tail race the
    /// whole sequence is retried, up to the configured bound.
    ///
    /// The append is the only side effect — notification and any follow-up
    /// work belong to the caller, after this returns `Ok`.
    ///
    /// # Errors
    ///
    /// `Storage` when the store cannot read or durably write; `Conflict`
    /// when contention on this entity outlasts the retry bound.  The core
    /// never swallows a failure: a skipped write would be an undetectable
    /// gap in the evidentiary chain.
    pub fn append(&self, change: &StateChange) -> AuditResult<AuditRecord> {
        for attempt in 1..=self.max_append_attempts {
            let previous_hash = self
                .store
                .fetch_latest(change.entity_id)?
                .map(|tail| tail.sequence_hash)
                .unwrap_or_default();

            let sequence_hash = sequence_hash(
                change.entity_id,
                change.actor_id,
                &change.action_type,
                change.previous_state.as_deref(),
                change.new_state.as_deref(),
                &change.details,
                &previous_hash,
            );

            let pending = PendingRecord {
                entity_id: change.entity_id,
                actor_id: change.actor_id,
                action_type: change.action_type.clone(),
                previous_state: change.previous_state.clone(),
                new_state: change.new_state.clone(),
                details: change.details.clone(),
                origin: change.origin.clone(),
                sequence_hash,
                previous_hash: previous_hash.clone(),
            };

            match self
                .store
                .append_if_latest_is(change.entity_id, &previous_hash, pending)
            {
                Ok(record) => {
                    debug!(
                        entity_id = change.entity_id,
                        actor_id = change.actor_id,
                        action_type = %change.action_type,
                        sequence_hash = %record.sequence_hash,
                        "audit record appended"
                    );
                    return Ok(record);
                }
                // Lost the tail race: another writer extended this entity's
                // chain between our read and our write.  Redo from the read.
                Err(AuditError::Conflict { .. }) => {
                    debug!(
                        entity_id = change.entity_id,
                        attempt,
                        "chain tail moved during append, retrying"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        warn!(
            entity_id = change.entity_id,
            attempts = self.max_append_attempts,
            "append contention not resolved within retry bound"
        );
        Err(AuditError::Conflict {
            entity_id: change.entity_id,
        })
    }

    /// Verify the integrity of an entity's full chain.
    ///
    /// `Ok(false)` means the chain has been tampered with or corrupted —
    /// a normal, expected outcome.  `Err(Storage)` means the answer could
    /// not be determined.  An entity with no records is trivially valid.
    pub fn verify(&self, entity_id: i64) -> AuditResult<bool> {
        Ok(self.verify_report(entity_id)?.is_valid())
    }

    /// Verify an entity's chain and report where it broke, if anywhere.
    ///
    /// Walks every record in insertion order, checking two things
    /// independently at each link:
    ///
    /// 1. the stored `previous_hash` equals the predecessor's
    ///    `sequence_hash` (empty string for the first record), and
    /// 2. the stored `sequence_hash` matches the value recomputed from the
    ///    record's persisted fields.
    ///
    /// Stops at the first fault.  A pure read: the chain is never mutated,
    /// and the walk may run concurrently with appends — a strict prefix of
    /// the final chain still verifies as valid.
    pub fn verify_report(&self, entity_id: i64) -> AuditResult<ChainReport> {
        let records = self.store.fetch_all(entity_id)?;

        let mut expected_previous_hash = String::new();
        for (position, record) in records.iter().enumerate() {
            if record.previous_hash != expected_previous_hash {
                warn!(
                    entity_id,
                    position, "chain verification failed: broken link pointer"
                );
                return Ok(faulted(entity_id, position, FaultKind::BrokenLink));
            }

            let recomputed = sequence_hash(
                record.entity_id,
                record.actor_id,
                &record.action_type,
                record.previous_state.as_deref(),
                record.new_state.as_deref(),
                &record.details,
                &expected_previous_hash,
            );
            if recomputed != record.sequence_hash {
                warn!(
                    entity_id,
                    position, "chain verification failed: sequence hash mismatch"
                );
                return Ok(faulted(entity_id, position, FaultKind::HashMismatch));
            }

            expected_previous_hash = record.sequence_hash.clone();
        }

        debug!(
            entity_id,
            records_checked = records.len(),
            "chain verified intact"
        );
        Ok(ChainReport {
            entity_id,
            records_checked: records.len(),
            fault: None,
        })
    }
}

fn faulted(entity_id: i64, position: usize, kind: FaultKind) -> ChainReport {
    ChainReport {
        entity_id,
        records_checked: position + 1,
        fault: Some(ChainFault { position, kind }),
    }
}
