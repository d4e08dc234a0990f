// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Partial (all-optional) mirror of the configuration tree.
//!
//! These types are used only for schema generation and validation of
//! administrative write patches; runtime reads never deserialize into them.
//! Unknown keys are rejected so a typo in an admin payload surfaces at write
//! time instead of silently never merging.

use crate::donation::SharingNetwork;
use crate::live::LiveTheme;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as J;
use std::collections::BTreeMap;

/// Root patch shape for one scope's override record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EventConfigPatch {
    pub theme: Option<ThemePatch>,
    pub content: Option<ContentPatch>,
    pub donation: Option<DonationPatch>,
    pub communication: Option<CommunicationPatch>,
    pub locales: Option<LocalesPatch>,
    pub live: Option<LivePatch>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemePatch {
    pub assets: Option<BTreeMap<String, String>>,
    pub variables: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentPatch {
    pub title: Option<String>,
    pub total_label: Option<String>,
    pub goal_amount: Option<f64>,
    pub landing: Option<LandingPatch>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LandingPatch {
    pub links: Option<Vec<LandingLinkPatch>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LandingLinkPatch {
    pub label: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DonationPatch {
    pub form: Option<DonationFormPatch>,
    pub sharing: Option<SharingPatch>,
    pub payment: Option<PaymentPatch>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DonationFormPatch {
    pub phone: Option<ToggleGroupPatch>,
    pub address: Option<ToggleGroupPatch>,
    pub company: Option<ToggleGroupPatch>,
    pub message: Option<ToggleGroupPatch>,
    pub anonymous: Option<ToggleGroupPatch>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ToggleGroupPatch {
    pub enabled: Option<bool>,
    pub required: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SharingPatch {
    pub enabled: Option<bool>,
    pub networks: Option<Vec<SharingNetwork>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PaymentPatch {
    pub provider: Option<String>,
    pub currency: Option<String>,
    pub config: Option<J>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommunicationPatch {
    pub legal_name: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub support_email: Option<String>,
    pub phone: Option<String>,
    pub tax_id: Option<String>,
    pub footer_text: Option<String>,
    pub signature_text: Option<String>,
    pub signature_image: Option<String>,
    pub email: Option<EmailPatch>,
    pub pdf: Option<PdfPatch>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmailPatch {
    pub enabled: Option<bool>,
    pub provider: Option<String>,
    pub from_name: Option<String>,
    pub from_email: Option<String>,
    pub reply_to: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PdfPatch {
    pub enabled: Option<bool>,
    pub template: Option<String>,
    pub paper_size: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LocalesPatch {
    pub default: Option<String>,
    pub supported: Option<Vec<String>>,
    /// Free-form: nested per-locale subtrees and/or flat dotted keys.
    pub overrides: Option<J>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LivePatch {
    pub theme: Option<LiveTheme>,
}
