// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Theming configuration: named image assets and CSS custom properties.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resolved theming section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Named image roles (logo, banner, favicon, ...) mapped to URLs.
    pub assets: BTreeMap<String, String>,
    /// CSS custom-property names (`--primary-color`) mapped to values.
    pub variables: BTreeMap<String, String>,
}
