// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Locale selection and string-override configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value as J;

/// Resolved locales section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocalesConfig {
    /// Locale used when the visitor expresses no preference.
    pub default: String,
    /// Ordered set of offered locale codes.
    pub supported: Vec<String>,
    /// String-table overrides, either nested per-locale subtrees or flat
    /// dotted keys. Opaque here; interpreted by the locale resolver.
    pub overrides: J,
}
