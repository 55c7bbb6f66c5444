//! # sgrs-audit
//!
//! Tamper-evident, append-only, SHA-256 hash-chained audit log for complaint
//! state changes.
//!
//! ## Overview
//!
//! Every mutation to a tracked entity's state is recorded as an
//! `AuditRecord` that links to the previous record for that entity via its
//! SHA-256 hash.  Tampering with any record — even a single byte —
//! breaks the chain and is detected by verification.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sgrs_audit::{AuditCore, InMemoryChainStore};
//!
//! let core = AuditCore::new(InMemoryChainStore::new());
//! let record = core.append(&change)?;
//! assert!(core.verify(change.entity_id)?);
//! ```
//!
//! The core is storage-agnostic: implement [`ChainStore`] over any durable
//! key-ordered store.  Per-entity append serialization is guaranteed by the
//! store's conditional write plus the core's bounded retry.

pub mod core;
pub mod hash;
pub mod memory;
pub mod store;

pub use crate::core::{AuditCore, DEFAULT_MAX_APPEND_ATTEMPTS};
pub use hash::sequence_hash;
pub use memory::InMemoryChainStore;
pub use store::ChainStore;

// ── Tests ─────────────────────────────────────────────────────────────────────
