//! Error types for the audit chain.
//!
//! Only genuine failures are errors.  An integrity violation found during
//! verification is a valid boolean outcome, not an error — `verify` returns
//! `Ok(false)` for "tampered", and `Err(Storage)` only for "could not
//! determine the answer".

use thiserror::Error;

/// The unified error type for audit-chain operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The chain store could not read or durably write.
    ///
    /// Always surfaced to the caller — the core never skips an audit write
    /// on failure, because a silent gap in the chain is itself a form of
    /// tampering.
    #[error("chain store error: {reason}")]
    Storage { reason: String },

    /// A concurrent append won the race for the same entity's chain tail.
    ///
    /// Retried inside the core up to its configured attempt bound; surfaced
    /// only when the bound is exhausted under sustained contention.
    #[error("concurrent append conflict on entity {entity_id}")]
    Conflict { entity_id: i64 },
}

/// Convenience alias used throughout the SGRS crates.
pub type AuditResult<T> = Result<T, AuditError>;
