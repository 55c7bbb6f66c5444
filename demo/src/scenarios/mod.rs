//! Audit chain demo scenarios.
//!
//! Each scenario is a self-contained module that wires up real components
//! (audit core, in-memory chain store) with mock grievance data and
//! demonstrates a distinct property of the chain.

pub mod contention;
pub mod lifecycle;
pub mod tamper;
