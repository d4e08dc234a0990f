// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Scope store abstraction over the persisted configuration rows.
//!
//! Exactly one row may exist per `(scope, entity_id)` pair: one GLOBAL row
//! (entity id [`GLOBAL_ENTITY_ID`]) and zero-or-one EVENT row per event.
//! `Ok(None)` means "no override record" and is never an error; persistence
//! failures surface as the implementation's own [`crate::Error::Store`].

use crate::error::Result;
use crate::mapper::{self, StorageRow};
use serde_json::Value as J;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Entity id of the single organization-wide record.
pub const GLOBAL_ENTITY_ID: &str = "*";

/// The level at which an override record applies.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Scope {
    /// Organization-wide branding, one record.
    Global,
    /// One campaign's branding, keyed by event id.
    Event,
}

/// Boundary contract to the persistence collaborator.
///
/// Implementations traffic in domain-partial trees; how the row is laid out
/// on disk (see [`StorageRow`]) is their concern. Reads and writes are
/// last-writer-wins at the row level; no optimistic locking is assumed.
pub trait ScopeStore {
    /// Fetch the partial tree for a scope, or `None` when no record exists.
    fn get_scoped_config(&self, scope: Scope, entity_id: &str) -> Result<Option<J>>;

    /// Create-or-update the record for a scope. Never duplicates.
    fn upsert_scoped_config(&self, scope: Scope, entity_id: &str, partial: &J) -> Result<()>;

    /// Delete the record, resetting the scope to fully inherited.
    fn delete_scoped_config(&self, scope: Scope, entity_id: &str) -> Result<()>;
}

/// In-memory store for tests and embedding.
///
/// Rows are held in the denormalized [`StorageRow`] shape and round-tripped
/// through the mapper on every access, the same path a SQL-backed store
/// takes.
#[derive(Default)]
pub struct InMemoryScopeStore {
    rows: Mutex<BTreeMap<(Scope, String), StorageRow>>,
}

impl InMemoryScopeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScopeStore for InMemoryScopeStore {
    fn get_scoped_config(&self, scope: Scope, entity_id: &str) -> Result<Option<J>> {
        let rows = self
            .rows
            .lock()
            .map_err(|e| crate::Error::Store(format!("row table lock poisoned: {}", e)))?;
        Ok(rows
            .get(&(scope, entity_id.to_string()))
            .map(|row| mapper::to_domain(row, None)))
    }

    fn upsert_scoped_config(&self, scope: Scope, entity_id: &str, partial: &J) -> Result<()> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|e| crate::Error::Store(format!("row table lock poisoned: {}", e)))?;
        rows.insert((scope, entity_id.to_string()), mapper::to_storage(partial));
        Ok(())
    }

    fn delete_scoped_config(&self, scope: Scope, entity_id: &str) -> Result<()> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|e| crate::Error::Store(format!("row table lock poisoned: {}", e)))?;
        rows.remove(&(scope, entity_id.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_record_reads_as_none() {
        let store = InMemoryScopeStore::new();
        assert!(store.get_scoped_config(Scope::Event, "ev-1").unwrap().is_none());
    }

    #[test]
    fn upsert_is_create_or_update() {
        let store = InMemoryScopeStore::new();
        let first = json!({"communication": {"legalName": "Org"}});
        let second = json!({"communication": {"legalName": "Renamed"}});

        store.upsert_scoped_config(Scope::Global, GLOBAL_ENTITY_ID, &first).unwrap();
        store.upsert_scoped_config(Scope::Global, GLOBAL_ENTITY_ID, &second).unwrap();

        let read = store.get_scoped_config(Scope::Global, GLOBAL_ENTITY_ID).unwrap().unwrap();
        assert_eq!(read["communication"]["legalName"], "Renamed");
    }

    #[test]
    fn delete_resets_to_inherited() {
        let store = InMemoryScopeStore::new();
        store
            .upsert_scoped_config(Scope::Event, "ev-1", &json!({"content": {"title": "Gala"}}))
            .unwrap();
        store.delete_scoped_config(Scope::Event, "ev-1").unwrap();
        assert!(store.get_scoped_config(Scope::Event, "ev-1").unwrap().is_none());
    }

    #[test]
    fn scopes_do_not_collide() {
        let store = InMemoryScopeStore::new();
        store
            .upsert_scoped_config(Scope::Global, GLOBAL_ENTITY_ID, &json!({"content": {"title": "G"}}))
            .unwrap();
        assert!(store.get_scoped_config(Scope::Event, GLOBAL_ENTITY_ID).unwrap().is_none());
    }
}
