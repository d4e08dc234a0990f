// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for the configuration engine

use thiserror::Error;

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or persisting configuration.
///
/// Absent inputs are never errors: a missing scope record, locale override
/// or stylesheet match falls back silently. These variants cover the write
/// path and the collaborator boundary only.
#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Store(String),

    #[error("Patch validation failed:\n  - {0}")]
    Validation(String),

    #[error("Typed extraction failed: {0}")]
    Extract(String),
}
