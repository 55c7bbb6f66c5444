//! Audit record types.
//!
//! `AuditRecord` is one immutable link in an entity's history chain — it
//! pairs a state-change event with the SHA-256 hashes that make tampering
//! detectable.  `StateChange` is the inbound event a caller hands to the
//! audit core; `PendingRecord` is the hashed-but-not-yet-persisted form the
//! core hands to the chain store.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The open, schema-less payload attached to a state change.
///
/// Callers define their own key vocabularies per action type (e.g. a
/// `CREATED` event carries `title` and `category`).  The map is ordered so
/// its serialization — and therefore the hash input — is deterministic.
pub type Details = BTreeMap<String, serde_json::Value>;

/// A state-change event reported by the surrounding application.
///
/// This is the full input to `AuditCore::append()`.  The core treats
/// `previous_state` / `new_state` as free-form labels and never interprets
/// `details` — it only folds them into the hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateChange {
    /// Identifier of the tracked object (e.g. complaint) this change belongs to.
    ///
    /// Existence is validated by the caller, not by the audit core.
    pub entity_id: i64,

    /// Identifier of the user or process that caused the transition.
    pub actor_id: i64,

    /// Short tag naming the kind of change (e.g. `"CREATED"`, `"UPDATED"`).
    /// Must be non-empty.
    pub action_type: String,

    /// State label before the transition.  `None` for the first record of an
    /// entity (nothing preceded creation).
    pub previous_state: Option<String>,

    /// State label after the transition, if the change produced one.
    pub new_state: Option<String>,

    /// Transition-specific context.  See [`Details`].
    pub details: Details,

    /// Network origin of the triggering request (e.g. caller IP), kept for
    /// forensics.  May be empty when unknown.  Not part of the hash.
    pub origin: String,
}

/// A single persisted link in an entity's hash chain.
///
/// Records for one `entity_id` form a strictly ordered chain via
/// `previous_hash` → `sequence_hash`.  Modifying any hashed field of a
/// stored record invalidates `sequence_hash` and every subsequent
/// `previous_hash`, which chain verification detects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    /// The tracked entity this record belongs to.
    pub entity_id: i64,

    /// Who caused the transition.
    pub actor_id: i64,

    /// Kind of change, e.g. `"CREATED"`.
    pub action_type: String,

    /// State label before the transition, if any.
    pub previous_state: Option<String>,

    /// State label after the transition, if any.
    pub new_state: Option<String>,

    /// Transition-specific context, hashed as sorted-key JSON.
    pub details: Details,

    /// Network origin of the triggering request.  Excluded from the hash.
    pub origin: String,

    /// SHA-256 hash (lowercase hex) over this record's canonical content
    /// concatenated with `previous_hash`.
    ///
    /// A pure function of (`entity_id`, `actor_id`, `action_type`,
    /// `previous_state`, `new_state`, `details`, `previous_hash`) — it
    /// excludes `created_at`, `origin`, and itself, so verification can
    /// reproduce it exactly from persisted fields.
    pub sequence_hash: String,

    /// The `sequence_hash` of the preceding record for the same entity, or
    /// the empty string for the first record of a chain.
    pub previous_hash: String,

    /// Wall-clock time (UTC) of the append, assigned by the chain store at
    /// insertion.  Not authoritative for ordering — insertion order is.
    pub created_at: DateTime<Utc>,
}

/// A fully hashed record awaiting insertion.
///
/// The audit core builds one of these after computing the hashes; the chain
/// store stamps `created_at` at commit time and returns the persisted
/// [`AuditRecord`].  Keeping the timestamp out of this type enforces the
/// rule that the store — not the core — assigns it.
#[derive(Debug, Clone)]
pub struct PendingRecord {
    pub entity_id: i64,
    pub actor_id: i64,
    pub action_type: String,
    pub previous_state: Option<String>,
    pub new_state: Option<String>,
    pub details: Details,
    pub origin: String,
    pub sequence_hash: String,
    pub previous_hash: String,
}

impl PendingRecord {
    /// Finalize this record with the store-assigned timestamp.
    pub fn into_record(self, created_at: DateTime<Utc>) -> AuditRecord {
        AuditRecord {
            entity_id: self.entity_id,
            actor_id: self.actor_id,
            action_type: self.action_type,
            previous_state: self.previous_state,
            new_state: self.new_state,
            details: self.details,
            origin: self.origin,
            sequence_hash: self.sequence_hash,
            previous_hash: self.previous_hash,
            created_at,
        }
    }
}
