// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for the access-graph REST client

use ag_api_contract::ApiContractError;
use thiserror::Error;

use crate::auth::AuthError;

/// Errors surfaced by [`AccessGraphClient`](crate::client::AccessGraphClient) operations.
///
/// Failures are lifted into this enum without further translation; callers
/// decide what is user-visible.
#[derive(Debug, Error)]
pub enum AccessClientError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL resolution error: {0}")]
    Resolve(#[from] ApiContractError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),
}

/// Result alias for client operations
pub type AccessClientResult<T> = Result<T, AccessClientError>;
