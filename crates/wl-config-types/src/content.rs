// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Event page content configuration.

use serde::{Deserialize, Serialize};

/// Resolved content section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentConfig {
    /// Display title of the event page.
    pub title: String,
    /// Label shown next to the raised total.
    pub total_label: String,
    /// Fundraising goal in major currency units.
    pub goal_amount: f64,
    /// Optional landing-page link list.
    pub landing: Option<LandingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LandingConfig {
    pub links: Vec<LandingLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LandingLink {
    pub label: String,
    pub url: String,
}
