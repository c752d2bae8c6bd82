// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Main REST API client implementation

use ag_api_contract::{ListEnvelope, Resource};
use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::debug;

use crate::auth::auth_headers;
use crate::context::RequestContext;
use crate::error::AccessClientResult;

/// Page size requested from every list endpoint.
const LIST_PAGE_SIZE: u32 = 4000;

/// REST API client for the access-graph service
#[derive(Debug, Clone)]
pub struct AccessGraphClient {
    http_client: HttpClient,
    context: RequestContext,
}

impl AccessGraphClient {
    /// Create a new client over the given context.
    pub fn new(context: RequestContext) -> Self {
        let http_client = HttpClient::builder()
            .user_agent("ag-rest-client/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            context,
        }
    }

    /// Get the request context
    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// List group types.
    pub async fn list_group_types(&self) -> AccessClientResult<Vec<Value>> {
        self.fetch_records(
            Resource::GroupTypeList,
            &["publicId", "name"],
            Some(LIST_PAGE_SIZE),
            &[],
        )
        .await
    }

    /// List groups with their parent and type references.
    pub async fn list_groups(&self) -> AccessClientResult<Vec<Value>> {
        self.fetch_records(
            Resource::GroupList,
            &[
                "agent",
                "parent.publicId",
                "publicId",
                "name",
                "type.publicId",
                "type.name",
            ],
            Some(LIST_PAGE_SIZE),
            &[],
        )
        .await
    }

    /// List agents with their asset and group membership references.
    pub async fn list_agents(&self) -> AccessClientResult<Vec<Value>> {
        self.fetch_records(
            Resource::AgentList,
            &["publicId", "name", "assets", "memberships.group.publicId"],
            Some(LIST_PAGE_SIZE),
            &[],
        )
        .await
    }

    /// List top-level assets.
    ///
    /// Parented and library assets are excluded server-side; the two
    /// `filters` expressions go out as separate query parameters.
    pub async fn list_assets(&self) -> AccessClientResult<Vec<Value>> {
        self.fetch_records(
            Resource::AssetList,
            &["publicId", "name", "memberships.group.publicId"],
            Some(LIST_PAGE_SIZE),
            &["isnull(parent)", "eq(isLibraryAsset,\"false\")"],
        )
        .await
    }

    /// List users with their group and role membership references.
    pub async fn list_users(&self) -> AccessClientResult<Vec<Value>> {
        self.fetch_records(
            Resource::UserList,
            &[
                "publicId",
                "name",
                "memberships.group.publicId",
                "memberships.role.publicId",
            ],
            Some(LIST_PAGE_SIZE),
            &[],
        )
        .await
    }

    /// Fetch the calling company's metadata.
    pub async fn get_my_company(&self) -> AccessClientResult<Vec<Value>> {
        self.fetch_records(Resource::MyCompany, &["name"], None, &[]).await
    }

    // Private helper methods

    /// Issue one GET against a resource and extract the `data` records.
    ///
    /// Query parameters are appended in declaration order: `fields`, then
    /// `page-size` when present, then each `filters` entry. The HTTP
    /// status is not inspected; whatever body comes back goes through the
    /// same JSON parse and `data` extraction.
    async fn fetch_records(
        &self,
        resource: Resource,
        fields: &[&str],
        page_size: Option<u32>,
        filters: &[&str],
    ) -> AccessClientResult<Vec<Value>> {
        let mut url = self.context.resolve(resource)?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("fields", &fields.join(","));
            if let Some(page_size) = page_size {
                query.append_pair("page-size", &page_size.to_string());
            }
            for filter in filters {
                query.append_pair("filters", filter);
            }
        }

        let headers = auth_headers(self.context.app_data())?;

        debug!(resource = %resource, url = %url, "issuing GET request");
        let response = self.http_client.get(url).headers(headers).send().await?;

        let text = response.text().await?;
        let envelope: ListEnvelope = serde_json::from_str(&text)?;
        Ok(envelope.into_records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_api_contract::{AccessTokenRef, AppData, BaseUrlResolver, CompanyRef};
    use std::sync::Arc;

    #[test]
    fn test_client_creation() {
        let resolver = BaseUrlResolver::from_url("http://localhost:3001").unwrap();
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
        let client = AccessGraphClient::new(context);

        assert_eq!(client.context().app_data().api_app_id, "app-1");
    }
}
