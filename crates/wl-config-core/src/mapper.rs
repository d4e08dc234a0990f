// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Bidirectional mapping between the denormalized storage row and the
//! nested domain tree.
//!
//! Storage keeps the most commonly edited leaves in scalar columns
//! (organization name, address, logo URL, ...) next to opaque JSON blob
//! columns holding whole subtrees. `to_domain` lowers the scalars into their
//! nested positions and layers the blobs on top through one ordered merge
//! sequence, so the skip-empty and replace-array rules apply uniformly.
//! `to_storage` routes a domain partial back into columns, pruning empties
//! down to SQL NULL so a saved-but-empty subtree can never shadow
//! inheritance at read time.

use crate::merge::merge;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as J};

/// One persisted configuration row. Every column is independently nullable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StorageRow {
    // Scalar columns mirroring the most commonly edited leaves
    pub organization: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub live_theme: Option<String>,

    // JSON blob columns, each holding an entire subtree
    pub assets: Option<J>,
    pub theme_variables: Option<J>,
    pub event: Option<J>,
    pub form: Option<J>,
    pub payment: Option<J>,
    pub social_network: Option<J>,
    pub communication: Option<J>,
    pub locales: Option<J>,
}

/// Dynamic fields sourced from the live event entity. They are merged at
/// the highest priority: facts the configuration rows cannot override.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntityFields {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub goal_amount: f64,
    pub slug: Option<String>,
}

/// The domain-tree layer contributed by the live entity.
pub fn entity_layer(fields: &EntityFields) -> J {
    json!({
        "content": {
            "title": fields.name,
            "goalAmount": fields.goal_amount
        }
    })
}

/// Convert a storage row into a domain partial.
///
/// Merge order, lowest to highest: scalar columns lowered into their nested
/// leaves, then the blob columns, then the dynamic entity fields. A blob
/// value therefore wins over a same-purpose scalar column, and entity facts
/// always win.
pub fn to_domain(row: &StorageRow, dynamic: Option<&EntityFields>) -> J {
    let scalars = json!({
        "communication": {
            "legalName": row.organization,
            "address": row.address,
            "phone": row.phone,
            "supportEmail": row.email,
            "website": row.website
        },
        "theme": {
            "assets": { "logo": row.logo }
        },
        "live": { "theme": row.live_theme }
    });

    let blobs = json!({
        "theme": {
            "assets": row.assets,
            "variables": row.theme_variables
        },
        "content": row.event,
        "donation": {
            "form": row.form,
            "payment": row.payment,
            "sharing": row.social_network
        },
        "communication": row.communication,
        "locales": row.locales
    });

    let mut layers: Vec<&J> = vec![&scalars, &blobs];
    let entity;
    if let Some(fields) = dynamic {
        entity = entity_layer(fields);
        layers.push(&entity);
    }
    let merged = merge(&json!({}), &layers);

    // Null columns leave null leaves behind when a whole subtree lands on an
    // empty slot; prune them so the partial only states what the row set.
    clean_for_persistence(&merged).unwrap_or_else(|| json!({}))
}

/// Convert a domain partial into a storage row patch.
///
/// Each top-level section present in the input is routed to its column(s);
/// every blob is pruned through [`clean_for_persistence`] first. The
/// `content.title` to `organization` sync is a same-patch heuristic: it only
/// checks whether `communication.legalName` was set in this patch, not in
/// the stored row.
pub fn to_storage(domain: &J) -> StorageRow {
    let mut row = StorageRow::default();

    if let Some(communication) = domain.get("communication") {
        row.organization = non_empty_str(communication, "legalName");
        row.address = non_empty_str(communication, "address");
        row.phone = non_empty_str(communication, "phone");
        row.email = non_empty_str(communication, "supportEmail");
        row.website = non_empty_str(communication, "website");
        row.communication = clean_for_persistence(communication);
    }

    if let Some(theme) = domain.get("theme") {
        if let Some(assets) = theme.get("assets") {
            row.logo = non_empty_str(assets, "logo");
            row.assets = clean_for_persistence(assets);
        }
        if let Some(variables) = theme.get("variables") {
            row.theme_variables = clean_for_persistence(variables);
        }
    }

    if let Some(content) = domain.get("content") {
        row.event = clean_for_persistence(content);
        // Keep the two "display name" concepts in sync when only the title
        // was edited in this patch.
        if row.organization.is_none() {
            row.organization = non_empty_str(content, "title");
        }
    }

    if let Some(donation) = domain.get("donation") {
        if let Some(form) = donation.get("form") {
            row.form = clean_for_persistence(form);
        }
        if let Some(payment) = donation.get("payment") {
            row.payment = clean_for_persistence(payment);
        }
        if let Some(sharing) = donation.get("sharing") {
            row.social_network = clean_for_persistence(sharing);
        }
    }

    if let Some(locales) = domain.get("locales") {
        row.locales = clean_for_persistence(locales);
    }

    if let Some(live) = domain.get("live") {
        row.live_theme = non_empty_str(live, "theme");
    }

    row
}

/// Recursively strip `""`/`null` leaves and now-empty objects.
///
/// `None` is the "store as SQL NULL" sentinel: persisting an empty object
/// would survive the merge engine's skip rule and silently mask lower
/// layers, so true emptiness must collapse all the way to NULL.
pub fn clean_for_persistence(subtree: &J) -> Option<J> {
    match subtree {
        J::Null => None,
        J::String(s) if s.is_empty() => None,
        J::Object(map) => {
            let mut cleaned = serde_json::Map::new();
            for (k, v) in map {
                if let Some(kept) = clean_for_persistence(v) {
                    cleaned.insert(k.clone(), kept);
                }
            }
            if cleaned.is_empty() {
                None
            } else {
                Some(J::Object(cleaned))
            }
        }
        other => Some(other.clone()),
    }
}

fn non_empty_str(v: &J, key: &str) -> Option<String> {
    v.get(key)
        .and_then(J::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_columns_lower_into_nested_leaves() {
        let row = StorageRow {
            organization: Some("Helping Hands".into()),
            email: Some("help@example.org".into()),
            logo: Some("/img/logo.png".into()),
            ..Default::default()
        };
        let domain = to_domain(&row, None);
        assert_eq!(domain["communication"]["legalName"], "Helping Hands");
        assert_eq!(domain["communication"]["supportEmail"], "help@example.org");
        assert_eq!(domain["theme"]["assets"]["logo"], "/img/logo.png");
    }

    #[test]
    fn blob_wins_over_same_purpose_scalar() {
        let row = StorageRow {
            organization: Some("Scalar name".into()),
            communication: Some(json!({"legalName": "Blob name"})),
            ..Default::default()
        };
        let domain = to_domain(&row, None);
        assert_eq!(domain["communication"]["legalName"], "Blob name");
    }

    #[test]
    fn entity_fields_always_win() {
        let row = StorageRow {
            event: Some(json!({"title": "Stored title", "goalAmount": 1.0})),
            ..Default::default()
        };
        let fields = EntityFields {
            id: "ev-1".into(),
            name: "Spring Gala".into(),
            description: None,
            goal_amount: 25000.0,
            slug: Some("spring-gala".into()),
        };
        let domain = to_domain(&row, Some(&fields));
        assert_eq!(domain["content"]["title"], "Spring Gala");
        assert_eq!(domain["content"]["goalAmount"], 25000.0);
    }

    #[test]
    fn round_trip_preserves_non_empty_leaves() {
        let patch = json!({
            "theme": {
                "assets": { "logo": "/img/a.png" },
                "variables": { "--primary-color": "#fff" }
            },
            "content": { "title": "Gala", "goalAmount": 500.0 },
            "donation": {
                "form": { "phone": { "enabled": true, "required": true } },
                "payment": { "provider": "stripe" },
                "sharing": { "networks": ["email"] }
            },
            "communication": { "legalName": "Org", "supportEmail": "s@o.org" },
            "locales": { "default": "fr" },
            "live": { "theme": "dark" }
        });

        let restored = to_domain(&to_storage(&patch), None);
        // Every explicitly-set leaf survives one full write/read cycle.
        assert_eq!(restored["theme"]["assets"]["logo"], "/img/a.png");
        assert_eq!(restored["theme"]["variables"]["--primary-color"], "#fff");
        assert_eq!(restored["content"]["title"], "Gala");
        assert_eq!(restored["content"]["goalAmount"], 500.0);
        assert_eq!(restored["donation"]["form"]["phone"]["required"], true);
        assert_eq!(restored["donation"]["payment"]["provider"], "stripe");
        assert_eq!(restored["donation"]["sharing"]["networks"], json!(["email"]));
        assert_eq!(restored["communication"]["legalName"], "Org");
        assert_eq!(restored["locales"]["default"], "fr");
        assert_eq!(restored["live"]["theme"], "dark");
    }

    #[test]
    fn title_syncs_to_organization_when_legal_name_absent() {
        let row = to_storage(&json!({"content": {"title": "Gala"}}));
        assert_eq!(row.organization.as_deref(), Some("Gala"));
    }

    #[test]
    fn title_does_not_override_explicit_legal_name() {
        let row = to_storage(&json!({
            "content": { "title": "Gala" },
            "communication": { "legalName": "Org" }
        }));
        assert_eq!(row.organization.as_deref(), Some("Org"));
    }

    #[test]
    fn logo_duplicates_into_scalar_column() {
        let row = to_storage(&json!({"theme": {"assets": {"logo": "/l.svg", "banner": "/b.jpg"}}}));
        assert_eq!(row.logo.as_deref(), Some("/l.svg"));
        assert_eq!(row.assets, Some(json!({"logo": "/l.svg", "banner": "/b.jpg"})));
    }

    #[test]
    fn cleaning_collapses_wholly_empty_subtrees_to_null() {
        assert_eq!(clean_for_persistence(&json!({"a": "", "b": {"c": null}})), None);
    }

    #[test]
    fn cleaning_keeps_non_empty_siblings() {
        let cleaned = clean_for_persistence(&json!({"a": "", "b": {"c": "kept"}}));
        assert_eq!(cleaned, Some(json!({"b": {"c": "kept"}})));
    }

    #[test]
    fn cleaning_keeps_arrays_and_scalars() {
        let cleaned = clean_for_persistence(&json!({"n": 0, "flag": false, "list": []}));
        assert_eq!(cleaned, Some(json!({"n": 0, "flag": false, "list": []})));
    }

    #[test]
    fn empty_row_reads_back_as_an_empty_partial() {
        assert_eq!(to_domain(&StorageRow::default(), None), json!({}));
    }

    #[test]
    fn empty_patch_maps_to_all_null_columns() {
        let row = to_storage(&json!({"communication": {"legalName": ""}}));
        assert_eq!(row, StorageRow::default());
    }
}
