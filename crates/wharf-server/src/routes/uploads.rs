// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Upload event HTTP handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use wharf_server_uploads::{handle_event, UploadEvent};

use crate::api::AppState;

/// POST /v1/events/upload - translate a storage event into notifications.
pub async fn receive_upload_event(
	State(state): State<AppState>,
	Json(event): Json<UploadEvent>,
) -> Response {
	let outcome = handle_event(&event, state.notifier.as_ref()).await;
	let status =
		StatusCode::from_u16(outcome.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
	(status, outcome.body).into_response()
}
