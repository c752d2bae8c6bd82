// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for API contract resolution

use thiserror::Error;

/// Errors that can occur while resolving API contract resources
#[derive(Debug, Error)]
pub enum ApiContractError {
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("no endpoint known for resource: {0}")]
    UnknownResource(String),
}
