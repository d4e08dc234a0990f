// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Write-path schema validation for administrative patches.
//!
//! Reads never validate: the default layer makes resolution total, so any
//! stored shape drift degrades to inherited values instead of failing. The
//! write path is where a typo'd key or unknown enum value must be caught.

use crate::error::{Error, Result};
use serde_json::Value as J;

/// Validate an administrative patch against the generated patch schema.
pub fn validate_patch(patch: &J) -> Result<()> {
    use jsonschema::{Draft, JSONSchema};
    use std::sync::OnceLock;

    static SCHEMA: OnceLock<J> = OnceLock::new();
    let schema = SCHEMA.get_or_init(|| {
        let rs = schemars::schema_for!(wl_config_types::patch::EventConfigPatch);
        serde_json::to_value(rs).expect("schema serialization should not fail")
    });

    static VALIDATOR: OnceLock<JSONSchema> = OnceLock::new();
    let validator = VALIDATOR.get_or_init(|| {
        JSONSchema::options()
            .with_draft(Draft::Draft202012)
            .compile(schema)
            .expect("schema compilation should not fail")
    });

    let validation_result = validator.validate(patch);
    if let Err(errors) = validation_result {
        let error_msg = errors.map(|e| e.to_string()).collect::<Vec<_>>().join("\n  - ");
        return Err(Error::Validation(error_msg));
    }

    Ok(())
}
