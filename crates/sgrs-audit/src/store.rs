//! The chain-store adapter trait.
//!
//! The audit core is storage-agnostic: anything durable and key-ordered — a
//! relational table, a log file, an embedded KV store — can back a chain by
//! implementing these three operations.  The conditional write is the one
//! piece of the concurrency contract the store must honor; everything else
//! (retry, hashing, verification) lives in the core.

use sgrs_contracts::{
    error::AuditResult,
    record::{AuditRecord, PendingRecord},
};

/// Persistence adapter for per-entity audit chains.
///
/// Implementations must treat chains as append-only: no update or delete
/// operation exists on this trait, and records returned from it are never
/// modified by the core.
pub trait ChainStore: Send + Sync {
    /// Return the most recently appended record for `entity_id` (by
    /// insertion order), or `None` when the entity has no records yet.
    fn fetch_latest(&self, entity_id: i64) -> AuditResult<Option<AuditRecord>>;

    /// Append `record` if and only if the current chain tail for `entity_id`
    /// still has `expected_previous_hash` as its `sequence_hash` (the empty
    /// string denotes an empty chain).
    ///
    /// This compare-and-append is what serializes concurrent appends for one
    /// entity: a writer that lost the race gets `AuditError::Conflict` and
    /// must redo the full read-compute-write sequence.  Appends for distinct
    /// entities never conflict with each other.
    ///
    /// On success the store assigns `created_at` and returns the persisted
    /// record.
    fn append_if_latest_is(
        &self,
        entity_id: i64,
        expected_previous_hash: &str,
        record: PendingRecord,
    ) -> AuditResult<AuditRecord>;

    /// Return every record for `entity_id` in insertion order.
    ///
    /// Ordering is authoritative here — by the store's natural ordering (an
    /// auto-incrementing id, file offset, …), not by `created_at`, since
    /// timestamps may collide.
    fn fetch_all(&self, entity_id: i64) -> AuditResult<Vec<AuditRecord>>;
}
