// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Typed extraction utilities for resolved configuration access

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value as J;

/// Extract the entire tree as a typed value
pub fn get<T: DeserializeOwned>(root: &J) -> Result<T> {
    serde_path_to_error::deserialize(root.clone())
        .map_err(|e| Error::Extract(format!("root extraction failed: {}", e)))
}

/// Extract a subsection at a dotted path
pub fn get_at<T: DeserializeOwned>(root: &J, dotted: &str) -> Result<T> {
    let mut cur = root;
    for p in dotted.split('.') {
        cur = cur
            .get(p)
            .ok_or_else(|| Error::Extract(format!("missing path: {}", dotted)))?;
    }
    serde_path_to_error::deserialize(cur.clone())
        .map_err(|e| Error::Extract(format!("path '{}' extraction failed: {}", dotted, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wl_config_types::donation::PaymentConfig;

    #[test]
    fn get_at_walks_dotted_paths() {
        let root = json!({
            "donation": {
                "payment": { "provider": "stripe", "currency": "USD", "config": {} }
            }
        });
        let payment: PaymentConfig = get_at(&root, "donation.payment").unwrap();
        assert_eq!(payment.provider, "stripe");
    }

    #[test]
    fn get_at_reports_missing_paths() {
        let err = get_at::<PaymentConfig>(&json!({}), "donation.payment").unwrap_err();
        assert!(err.to_string().contains("donation.payment"));
    }
}
