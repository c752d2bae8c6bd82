// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! API contract types for the access-graph REST service

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Symbolic names of the resources exposed by the access-graph API.
///
/// The spellings returned by [`Resource::name`] are part of the wire
/// contract; endpoint paths are derived from them verbatim and must never
/// be re-cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    GroupTypeList,
    GroupList,
    AgentList,
    AssetList,
    UserList,
    MyCompany,
}

impl Resource {
    /// Server-side spelling of the resource name.
    pub fn name(&self) -> &'static str {
        match self {
            Resource::GroupTypeList => "GroupTypeList",
            Resource::GroupList => "GroupList",
            Resource::AgentList => "AgentList",
            Resource::AssetList => "AssetList",
            Resource::UserList => "UserList",
            Resource::MyCompany => "MyCompany",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Company reference carried inside [`AppData`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRef {
    pub public_id: String,
}

/// Access token reference carried inside [`AppData`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenRef {
    pub secret_id: String,
}

/// Identity bundle injected by the host application.
///
/// The serde renames preserve the host platform's camelCase spellings so
/// the bundle deserializes directly from the payload the host hands out.
/// The client only ever reads these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub api_app_id: String,
    pub api_version: String,
    pub company: CompanyRef,
    pub access_token: AccessTokenRef,
}

/// Response envelope returned by every read endpoint.
///
/// The server owns the record shapes; they pass through as raw JSON
/// values. A response without a `data` field, or with `data: null`, is an
/// empty result rather than an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEnvelope {
    #[serde(default)]
    pub data: Option<Vec<Value>>,
}

impl ListEnvelope {
    /// Extract the records, treating an absent `data` field as empty.
    pub fn into_records(self) -> Vec<Value> {
        self.data.unwrap_or_default()
    }
}
