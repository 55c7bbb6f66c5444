//! In-memory implementation of `ChainStore`.
//!
//! `InMemoryChainStore` is the reference implementation: one `Vec` of
//! records per entity behind a single `Mutex`, so the compare-and-append in
//! `append_if_latest_is` is atomic.  It backs the test suite and the demo;
//! production deployments implement `ChainStore` over their database with
//! the conditional write expressed as a guarded INSERT.
//!
//! The store is cheap to clone — clones share the same chains via `Arc`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use sgrs_contracts::{
    error::{AuditError, AuditResult},
    record::{AuditRecord, PendingRecord},
};

use crate::store::ChainStore;

/// An in-memory, append-only chain store.
///
/// # Thread safety
///
/// All three trait operations acquire an internal `Mutex`, so a single
/// instance (or its clones) can be shared freely across threads.
#[derive(Clone, Default)]
pub struct InMemoryChainStore {
    chains: Arc<Mutex<HashMap<i64, Vec<AuditRecord>>>>,
}

impl InMemoryChainStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records across all entities.
    pub fn len(&self) -> usize {
        self.chains
            .lock()
            .map(|chains| chains.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mutate a stored record in place, bypassing the append-only contract.
    ///
    /// Exists solely so tests and the tamper demo can simulate an attacker
    /// editing storage out-of-band.  Returns false when the entity or index
    /// does not exist.  Never call this from application code — the whole
    /// point of the chain is that this kind of edit is detectable.
    pub fn mutate<F>(&self, entity_id: i64, index: usize, f: F) -> bool
    where
        F: FnOnce(&mut AuditRecord),
    {
        let mut chains = match self.chains.lock() {
            Ok(chains) => chains,
            Err(_) => return false,
        };
        match chains.get_mut(&entity_id).and_then(|c| c.get_mut(index)) {
            Some(record) => {
                f(record);
                true
            }
            None => false,
        }
    }

    /// Swap two records of one entity in place, for reorder-detection tests.
    pub fn swap(&self, entity_id: i64, a: usize, b: usize) -> bool {
        let mut chains = match self.chains.lock() {
            Ok(chains) => chains,
            Err(_) => return false,
        };
        match chains.get_mut(&entity_id) {
            Some(chain) if a < chain.len() && b < chain.len() => {
                chain.swap(a, b);
                true
            }
            _ => false,
        }
    }
}

impl ChainStore for InMemoryChainStore {
    fn fetch_latest(&self, entity_id: i64) -> AuditResult<Option<AuditRecord>> {
        let chains = self.chains.lock().map_err(|e| AuditError::Storage {
            reason: format!("chain store lock poisoned: {e}"),
        })?;
        Ok(chains.get(&entity_id).and_then(|c| c.last()).cloned())
    }

    fn append_if_latest_is(
        &self,
        entity_id: i64,
        expected_previous_hash: &str,
        record: PendingRecord,
    ) -> AuditResult<AuditRecord> {
        let mut chains = self.chains.lock().map_err(|e| AuditError::Storage {
            reason: format!("chain store lock poisoned: {e}"),
        })?;

        let chain = chains.entry(entity_id).or_default();
        let tail_hash = chain.last().map(|r| r.sequence_hash.as_str()).unwrap_or("");
        if tail_hash != expected_previous_hash {
            return Err(AuditError::Conflict { entity_id });
        }

        let persisted = record.into_record(Utc::now());
        chain.push(persisted.clone());
        Ok(persisted)
    }

    fn fetch_all(&self, entity_id: i64) -> AuditResult<Vec<AuditRecord>> {
        let chains = self.chains.lock().map_err(|e| AuditError::Storage {
            reason: format!("chain store lock poisoned: {e}"),
        })?;
        Ok(chains.get(&entity_id).cloned().unwrap_or_default())
    }
}
