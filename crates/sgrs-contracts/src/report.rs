//! Chain verification report types.
//!
//! `verify` answers with a plain boolean; administrative tooling usually
//! wants to know *where* a chain broke.  `ChainReport` carries that
//! diagnostic: the position of the first faulted record and which of the two
//! independent checks failed there.

use serde::{Deserialize, Serialize};

/// Which integrity check failed at a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultKind {
    /// The record's stored `previous_hash` does not equal the
    /// `sequence_hash` of its true predecessor (chain splice or reorder).
    BrokenLink,

    /// The record's stored `sequence_hash` does not match the value
    /// recomputed from its persisted fields (content mutation or forgery).
    HashMismatch,
}

/// The first point at which a chain failed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainFault {
    /// Zero-based position of the faulted record in insertion order.
    pub position: usize,

    /// Which check failed.  When both would fail at the same record, the
    /// link check is reported — it is evaluated first.
    pub kind: FaultKind,
}

/// The outcome of verifying one entity's full chain.
///
/// Verification short-circuits at the first fault, so `fault` describes the
/// earliest detectable violation; later records are not examined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainReport {
    /// The entity whose chain was verified.
    pub entity_id: i64,

    /// Number of records examined (the full chain when valid, the faulted
    /// prefix plus one otherwise).
    pub records_checked: usize,

    /// The first violation, or `None` for an intact chain.  An empty chain
    /// is trivially intact.
    pub fault: Option<ChainFault>,
}

impl ChainReport {
    /// True when no violation was found.
    pub fn is_valid(&self) -> bool {
        self.fault.is_none()
    }
}
