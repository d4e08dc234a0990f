// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Layered white-label configuration engine.
//!
//! One codebase serves many differently-branded fundraising events; this
//! crate resolves, at read time, a single consistent configuration from
//! several independently-edited partial layers: Default, then Global, then
//! Event, then live entity fields. There is no derived cache; freshness
//! comes from recomputing the cascade on every call, so a read always
//! reflects the latest successful write.
//!
//! All merging operates on `serde_json::Value`; typed access goes through
//! [`extract`] against the fully merged tree, which is total because the
//! default layer is total.

pub mod defaults;
pub mod error;
pub mod extract;
pub mod locale;
pub mod mapper;
pub mod merge;
pub mod store;
pub mod theme;
pub mod validate;

pub use error::{Error, Result};
pub use store::{InMemoryScopeStore, Scope, ScopeStore, GLOBAL_ENTITY_ID};

use mapper::EntityFields;
use merge::merge;
use serde_json::{json, Value as J};
use std::collections::BTreeMap;
use wl_config_types::EventConfig;

/// Resolves configuration against an explicitly injected scope store.
///
/// Holds no state of its own; two resolvers over the same store are
/// interchangeable, and concurrent reads always see an internally
/// consistent cascade.
pub struct ConfigResolver<'a, S: ScopeStore> {
    store: &'a S,
}

impl<'a, S: ScopeStore> ConfigResolver<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// The merged raw tree for an event: Default over Global over Event.
    pub fn resolve_event_partial(&self, event_id: &str) -> Result<J> {
        let global = self.store.get_scoped_config(Scope::Global, GLOBAL_ENTITY_ID)?;
        let event = self.store.get_scoped_config(Scope::Event, event_id)?;
        tracing::debug!(
            event_id,
            has_global = global.is_some(),
            has_event = event.is_some(),
            "resolving event configuration cascade"
        );

        let mut layers: Vec<&J> = Vec::with_capacity(2);
        if let Some(ref g) = global {
            layers.push(g);
        }
        if let Some(ref e) = event {
            layers.push(e);
        }
        Ok(merge(defaults::default_config(), &layers))
    }

    /// The fully typed configuration for an event, with the live entity's
    /// own fields merged at highest priority.
    pub fn resolve_event_config(
        &self,
        event_id: &str,
        dynamic: Option<&EntityFields>,
    ) -> Result<EventConfig> {
        let mut merged = self.resolve_event_partial(event_id)?;
        if let Some(fields) = dynamic {
            merged = merge(&merged, &[&mapper::entity_layer(fields)]);
        }
        let mut config: EventConfig = extract::get(&merged)?;
        dedup_networks(&mut config);
        Ok(config)
    }

    /// The organization-wide configuration: Default over Global.
    pub fn resolve_global_config(&self) -> Result<EventConfig> {
        let global = self.store.get_scoped_config(Scope::Global, GLOBAL_ENTITY_ID)?;
        let layers: Vec<&J> = global.iter().collect();
        let merged = merge(defaults::default_config(), &layers);
        let mut config: EventConfig = extract::get(&merged)?;
        dedup_networks(&mut config);
        Ok(config)
    }

    /// The stored global record as-is, `None` when nothing was ever saved.
    pub fn read_global(&self) -> Result<Option<J>> {
        self.store.get_scoped_config(Scope::Global, GLOBAL_ENTITY_ID)
    }

    /// Validate and persist the organization-wide record (full replace).
    pub fn save_global(&self, patch: &J) -> Result<()> {
        validate::validate_patch(patch)?;
        tracing::debug!("saving global configuration record");
        self.store.upsert_scoped_config(Scope::Global, GLOBAL_ENTITY_ID, patch)
    }

    /// Validate and persist an event's branding as a partial patch merged
    /// over whatever that event had stored before.
    pub fn save_event_branding(&self, event_id: &str, patch: &J) -> Result<()> {
        validate::validate_patch(patch)?;
        let existing = self
            .store
            .get_scoped_config(Scope::Event, event_id)?
            .unwrap_or_else(|| json!({}));
        let merged = merge(&existing, &[patch]);
        tracing::debug!(event_id, "saving event branding record");
        self.store.upsert_scoped_config(Scope::Event, event_id, &merged)
    }

    /// Delete the event record: reset to fully inherited branding.
    pub fn reset_event_branding(&self, event_id: &str) -> Result<()> {
        tracing::debug!(event_id, "resetting event branding to inherited");
        self.store.delete_scoped_config(Scope::Event, event_id)
    }

    /// The string table for one locale, with the event's configured
    /// overrides applied.
    pub fn resolve_locale_strings(&self, event_id: &str, locale_code: &str) -> Result<J> {
        let partial = self.resolve_event_partial(event_id)?;
        let overrides = partial.pointer("/locales/overrides");
        Ok(locale::resolve_locale(locale_code, overrides))
    }

    /// The cascaded theme variable map for an event:
    /// defaults, then the global record, then the event record.
    pub fn resolve_theme_variables(&self, event_id: &str) -> Result<BTreeMap<String, String>> {
        let base = theme::variables_from_partial(defaults::default_config());
        let global = self
            .store
            .get_scoped_config(Scope::Global, GLOBAL_ENTITY_ID)?
            .map(|g| theme::variables_from_partial(&g))
            .unwrap_or_default();
        let event = self
            .store
            .get_scoped_config(Scope::Event, event_id)?
            .map(|e| theme::variables_from_partial(&e))
            .unwrap_or_default();
        Ok(theme::resolve_variables(
            &theme::resolve_variables(&base, &global),
            &event,
        ))
    }
}

/// Distinct-set semantics for sharing networks, first occurrence wins.
fn dedup_networks(config: &mut EventConfig) {
    let networks = &mut config.donation.sharing.networks;
    let mut seen = Vec::with_capacity(networks.len());
    networks.retain(|n| {
        if seen.contains(n) {
            false
        } else {
            seen.push(*n);
            true
        }
    });
}
