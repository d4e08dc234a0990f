// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Live donation screen configuration.

use serde::{Deserialize, Serialize};

/// Resolved live-screen section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiveConfig {
    pub theme: LiveTheme,
}

/// Visual theme of the live donation screen.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum LiveTheme {
    Classic,
    Dark,
    Contrast,
}
