// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
	pub version: &'static str,
	pub timestamp: String,
	pub stack: String,
	pub notifier_configured: bool,
}

/// GET /health - cheap liveness and configuration report. Makes no backend
/// calls.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	Json(HealthResponse {
		status: "ok",
		version: env!("CARGO_PKG_VERSION"),
		timestamp: chrono::Utc::now().to_rfc3339(),
		stack: state.config.stack.stack_name(),
		notifier_configured: state.notifier.is_configured(),
	})
}
