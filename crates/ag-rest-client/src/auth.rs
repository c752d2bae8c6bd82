// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Authentication header construction

use ag_api_contract::AppData;
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION};
use thiserror::Error;

/// Header carrying the API application id.
pub const API_APPLICATION: &str = "Api-Application";
/// Header carrying the API version.
pub const API_VERSION: &str = "Api-Version";
/// Header scoping the request to a company.
pub const API_COMPANY: &str = "Api-Company";

/// Errors that can occur while assembling authentication headers
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("header value contains invalid characters: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
}

/// Build the fixed header set for an authenticated API request.
///
/// Pure function of the injected [`AppData`]: values are copied verbatim,
/// the access token is formatted as a bearer credential, and nothing is
/// cached or refreshed.
pub fn auth_headers(app_data: &AppData) -> Result<HeaderMap, AuthError> {
    let mut headers = HeaderMap::new();
    headers.insert(API_APPLICATION, HeaderValue::from_str(&app_data.api_app_id)?);
    headers.insert(API_VERSION, HeaderValue::from_str(&app_data.api_version)?);
    headers.insert(API_COMPANY, HeaderValue::from_str(&app_data.company.public_id)?);
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", app_data.access_token.secret_id))?,
    );
    Ok(headers)
}
