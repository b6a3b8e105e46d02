// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Lifecycle invocation HTTP handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use wharf_server_lifecycle::{CancellationToken, LifecycleRequest};

use crate::api::AppState;
use crate::api_response;

/// POST /v1/lifecycle - run one lifecycle action to a terminal outcome.
///
/// Response codes: 200 for every success (started, stopped, test), 400 for a
/// missing or unsupported action (no backend call, no notification), 500 for
/// any backend, timeout, or integrity failure.
pub async fn invoke_lifecycle(
	State(state): State<AppState>,
	Json(body): Json<serde_json::Value>,
) -> Response {
	let action = body
		.get("action")
		.and_then(|value| value.as_str())
		.unwrap_or_default();

	let request = match LifecycleRequest::parse(action) {
		Ok(request) => request,
		Err(err) => {
			return api_response::bad_request(err.kind(), err.to_string()).into_response();
		}
	};

	// One token per invocation; the HTTP layer itself never cancels, but the
	// loop stays cooperatively cancellable for callers that do.
	let cancel = CancellationToken::new();
	match state.controller.handle(request, &cancel).await {
		Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
		Err(err) => api_response::internal_error(err.kind(), err.to_string()).into_response(),
	}
}
