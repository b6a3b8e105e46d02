// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! On-demand SFTP server lifecycle service.
//!
//! This crate provides the HTTP surface and startup wiring over the
//! lifecycle controller: one route to run a lifecycle action, one to
//! translate storage upload events into notifications, and a health probe.

pub mod api;
pub mod api_response;
pub mod routes;

pub use api::{create_app_state, create_router, stack_spec, AppState};
pub use api_response::ErrorResponse;
pub use wharf_server_config::ServerConfig;
