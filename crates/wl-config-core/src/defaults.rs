// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! The default configuration layer.
//!
//! A total `EventConfig`-shaped tree: every field the resolved model knows is
//! populated here, so resolution can never come up short no matter how empty
//! the override layers are. Built once, immutable, and the unconditional
//! base of every cascade; nothing ever merges under it.

use serde_json::{json, Value as J};
use std::sync::OnceLock;

/// The fully-populated baseline configuration tree.
pub fn default_config() -> &'static J {
    static DEFAULTS: OnceLock<J> = OnceLock::new();
    DEFAULTS.get_or_init(|| {
        json!({
            "theme": {
                "assets": {
                    "logo": "/static/branding/logo.svg",
                    "banner": "/static/branding/banner.jpg",
                    "favicon": "/static/branding/favicon.ico",
                    "emailHeader": "/static/branding/email-header.png"
                },
                "variables": {
                    "--primary-color": "#2f6f4f",
                    "--secondary-color": "#f5a623",
                    "--background-color": "#ffffff",
                    "--text-color": "#1d1d1f",
                    "--font-family": "'Inter', sans-serif"
                }
            },
            "content": {
                "title": "Fundraising event",
                "totalLabel": "Raised so far",
                "goalAmount": 10000.0,
                "landing": {
                    "links": []
                }
            },
            "donation": {
                "form": {
                    "phone": { "enabled": false, "required": false },
                    "address": { "enabled": true, "required": false },
                    "company": { "enabled": false, "required": false },
                    "message": { "enabled": true, "required": false },
                    "anonymous": { "enabled": true, "required": false }
                },
                "sharing": {
                    "enabled": true,
                    "networks": ["facebook", "twitter", "linkedin", "whatsapp", "email"]
                },
                "payment": {
                    "provider": "mollie",
                    "currency": "EUR",
                    "config": {}
                }
            },
            "communication": {
                "legalName": "Your organization",
                "address": "",
                "website": "",
                "supportEmail": "support@example.org",
                "phone": "",
                "taxId": "",
                "footerText": "Thank you for supporting our cause.",
                "signatureText": "The fundraising team",
                "signatureImage": "",
                "email": {
                    "enabled": false,
                    "provider": "smtp",
                    "fromName": "Your organization",
                    "fromEmail": "no-reply@example.org",
                    "replyTo": "support@example.org"
                },
                "pdf": {
                    "enabled": false,
                    "template": "receipt-default",
                    "paperSize": "A4"
                }
            },
            "locales": {
                "default": "en",
                "supported": ["en", "fr"],
                "overrides": {}
            },
            "live": {
                "theme": "classic"
            }
        })
    })
}
