// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Distributed, strongly-typed configuration structs for the white-label
//! event engine.
//!
//! This crate defines two shapes of the same configuration tree:
//!
//! * The resolved types (`EventConfig` and its sections) in which every field
//!   is present. They are deserialized from a fully merged configuration
//!   tree, which is total because the default layer is total.
//! * The patch types (`patch::EventConfigPatch` and friends) in which every
//!   field is optional. They exist for schema generation and validation of
//!   administrative writes; runtime access always goes through the resolved
//!   types or raw `serde_json::Value` partials.

pub mod communication;
pub mod content;
pub mod donation;
pub mod live;
pub mod locale;
pub mod patch;
pub mod theme;

use serde::{Deserialize, Serialize};

/// The fully resolved configuration for one event (or for the organization
/// as a whole when resolved at GLOBAL scope).
///
/// Every field is populated after resolution; absence during merging means
/// "inherit", never "missing downstream".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventConfig {
    pub theme: theme::ThemeConfig,
    pub content: content::ContentConfig,
    pub donation: donation::DonationConfig,
    pub communication: communication::CommunicationConfig,
    pub locales: locale::LocalesConfig,
    pub live: live::LiveConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sharing_network_uses_lowercase_wire_names() {
        let net: donation::SharingNetwork = serde_json::from_str("\"facebook\"").unwrap();
        assert_eq!(net, donation::SharingNetwork::Facebook);
        assert_eq!(serde_json::to_string(&net).unwrap(), "\"facebook\"");
    }

    #[test]
    fn live_theme_round_trips() {
        let theme: live::LiveTheme = serde_json::from_str("\"contrast\"").unwrap();
        assert_eq!(theme, live::LiveTheme::Contrast);
    }

    #[test]
    fn domain_fields_are_camel_cased() {
        let content = content::ContentConfig {
            title: "Gala".into(),
            total_label: "Raised".into(),
            goal_amount: 5000.0,
            landing: None,
        };
        let json = serde_json::to_value(&content).unwrap();
        assert!(json.get("totalLabel").is_some());
        assert!(json.get("goalAmount").is_some());
        assert!(json.get("total_label").is_none());
    }

    #[test]
    fn patch_rejects_unknown_keys() {
        let raw = serde_json::json!({ "theme": { "colours": {} } });
        let parsed: Result<patch::EventConfigPatch, _> = serde_json::from_value(raw);
        assert!(parsed.is_err());
    }
}
