// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Caller-supplied request context

use std::fmt;
use std::sync::Arc;

use ag_api_contract::{ApiContractError, ApiUrlResolver, AppData, Resource};
use url::Url;

/// Immutable context injected by the host application.
///
/// Bundles the endpoint resolver with the identity data used to build
/// request headers. Cloning is cheap and the context may be shared across
/// concurrently running operations; nothing in it is ever mutated.
#[derive(Clone)]
pub struct RequestContext {
    resolver: Arc<dyn ApiUrlResolver>,
    app_data: AppData,
}

impl RequestContext {
    /// Create a context from a resolver and the host's app data.
    pub fn new(resolver: Arc<dyn ApiUrlResolver>, app_data: AppData) -> Self {
        Self { resolver, app_data }
    }

    /// Resolve the endpoint URL for a resource.
    pub fn resolve(&self, resource: Resource) -> Result<Url, ApiContractError> {
        self.resolver.api_url(resource)
    }

    /// Identity data used for request headers.
    pub fn app_data(&self) -> &AppData {
        &self.app_data
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("app_data", &self.app_data)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_api_contract::{AccessTokenRef, BaseUrlResolver, CompanyRef};

    #[test]
    fn resolves_through_injected_resolver() {
        let resolver = BaseUrlResolver::from_url("https://api.example.com").expect("base url");
        let context = RequestContext::new(
            Arc::new(resolver),
            AppData {
                api_app_id: "app-1".to_string(),
                api_version: "2".to_string(),
                company: CompanyRef {
                    public_id: "company-1".to_string(),
                },
                access_token: AccessTokenRef {
                    secret_id: "secret-1".to_string(),
                },
            },
        );

        let url = context.resolve(Resource::AgentList).expect("resolved url");
        assert_eq!(url.as_str(), "https://api.example.com/AgentList");
        assert_eq!(context.app_data().company.public_id, "company-1");
    }
}
