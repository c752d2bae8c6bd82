// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! URL resolution for symbolic resource names

use url::Url;

use crate::error::ApiContractError;
use crate::types::Resource;

/// Maps symbolic resource names to concrete endpoint URLs.
///
/// Endpoint discovery belongs to the host application; the client only
/// ever asks for a [`Resource`] by name. Implementations must be shareable
/// across concurrently running requests.
pub trait ApiUrlResolver: Send + Sync {
    /// Resolve the endpoint URL for `resource`.
    fn api_url(&self, resource: Resource) -> Result<Url, ApiContractError>;
}

/// Stock resolver appending the resource name to a fixed base URL.
#[derive(Debug, Clone)]
pub struct BaseUrlResolver {
    base_url: Url,
}

impl BaseUrlResolver {
    /// Create a resolver for endpoints of the form `<base>/<ResourceName>`.
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Create a resolver from a base URL string.
    pub fn from_url(base_url: &str) -> Result<Self, ApiContractError> {
        Ok(Self::new(Url::parse(base_url)?))
    }
}

impl ApiUrlResolver for BaseUrlResolver {
    fn api_url(&self, resource: Resource) -> Result<Url, ApiContractError> {
        // Url::join drops the last path segment of a base without a
        // trailing slash, so only join when the slash is already there.
        let url = if self.base_url.path().ends_with('/') {
            self.base_url.join(resource.name())?
        } else {
            Url::parse(&format!("{}/{}", self.base_url, resource.name()))?
        };
        Ok(url)
    }
}
