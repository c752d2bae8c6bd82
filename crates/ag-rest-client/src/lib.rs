// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! REST API client for the access-graph service
//!
//! This crate provides the HTTP client used to read a company's access
//! graph (group types, groups, agents, assets, users and company metadata)
//! from the remote REST API. It is deliberately thin: one GET per
//! operation, authentication headers sourced from the injected
//! [`RequestContext`], and the response's raw JSON records forwarded to
//! the caller.
//!
//! There is no retry, caching or status-code branching here. Transport and
//! parse failures propagate unchanged, keeping the host application in
//! charge of user-visible error behavior.

pub mod auth;
pub mod client;
pub mod context;
pub mod error;

pub use auth::*;
pub use client::*;
pub use context::*;
pub use error::*;
