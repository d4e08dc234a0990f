// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Organization identity and outbound communication configuration.

use serde::{Deserialize, Serialize};

/// Resolved communication section: the organization identity printed on
/// receipts and emails, plus the email/PDF sub-configurations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationConfig {
    pub legal_name: String,
    pub address: String,
    pub website: String,
    pub support_email: String,
    pub phone: String,
    pub tax_id: String,
    pub footer_text: String,
    pub signature_text: String,
    pub signature_image: String,
    pub email: EmailConfig,
    pub pdf: PdfConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailConfig {
    pub enabled: bool,
    /// Delivery provider identifier, e.g. "smtp" or "mailgun".
    pub provider: String,
    pub from_name: String,
    pub from_email: String,
    pub reply_to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PdfConfig {
    pub enabled: bool,
    /// Receipt template identifier.
    pub template: String,
    pub paper_size: String,
}
