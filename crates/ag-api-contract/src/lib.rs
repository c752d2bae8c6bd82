// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! access-graph REST API contract types and URL resolution
//!
//! This crate defines the wire-level contract for the access-graph REST
//! API: the catalog of list resources, the response envelope, the identity
//! bundle injected by the host application, and the resolution seam that
//! maps symbolic resource names to concrete endpoint URLs. The types are
//! shared between the REST client and any host-side tooling that speaks
//! the same API.

pub mod error;
pub mod resolver;
pub mod types;

pub use error::*;
pub use resolver::*;
pub use types::*;
