// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Donation flow configuration: form toggles, social sharing, payment.

use serde::{Deserialize, Serialize};
use serde_json::Value as J;

/// Resolved donation section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DonationConfig {
    pub form: DonationForm,
    pub sharing: SharingConfig,
    pub payment: PaymentConfig,
}

/// The five optional donor-detail groups on the donation form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DonationForm {
    pub phone: ToggleGroup,
    pub address: ToggleGroup,
    pub company: ToggleGroup,
    pub message: ToggleGroup,
    pub anonymous: ToggleGroup,
}

/// One form field group: shown at all, and mandatory when shown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToggleGroup {
    pub enabled: bool,
    pub required: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SharingConfig {
    pub enabled: bool,
    /// Distinct set of known networks, first occurrence wins on duplicates.
    pub networks: Vec<SharingNetwork>,
}

/// Closed set of supported sharing targets. Unknown identifiers fail schema
/// validation on the write path.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SharingNetwork {
    Facebook,
    Twitter,
    Linkedin,
    Whatsapp,
    Email,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfig {
    /// Payment gateway identifier, e.g. "mollie" or "stripe".
    pub provider: String,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Gateway-specific settings, opaque to the engine.
    pub config: J,
}
