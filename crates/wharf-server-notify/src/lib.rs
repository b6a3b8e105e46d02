// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Best-effort webhook notification channel.
//!
//! Messages are posted as `{"text": ...}` JSON to a configured webhook URL
//! (Slack-style incoming webhook). Delivery never fails the caller: transport
//! errors are logged and swallowed, and an unconfigured destination turns
//! `notify` into a no-op. Any HTTP response, whatever its status code, counts
//! as delivered; the status is logged for diagnosis.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, trace, warn};

/// Fire-and-forget delivery of a text message to the notification channel.
#[async_trait]
pub trait Notifier: Send + Sync {
	/// Attempt delivery. Never raises to the caller.
	async fn notify(&self, message: &str);

	/// Whether a destination is configured at all.
	fn is_configured(&self) -> bool;
}

#[derive(Debug, Serialize)]
struct NotificationPayload<'a> {
	text: &'a str,
}

/// Webhook-backed [`Notifier`].
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
	client: reqwest::Client,
	url: Option<String>,
}

impl WebhookNotifier {
	/// Creates a notifier for the given destination. `None` produces a
	/// notifier whose `notify` is a no-op — a valid deployment, not an error.
	pub fn new(url: Option<String>, timeout: Duration) -> Self {
		let client = reqwest::Client::builder()
			.timeout(timeout)
			.build()
			.expect("failed to build HTTP client");
		Self { client, url }
	}

	/// A notifier with no destination.
	pub fn disabled() -> Self {
		Self::new(None, Duration::from_secs(10))
	}
}

#[async_trait]
impl Notifier for WebhookNotifier {
	async fn notify(&self, message: &str) {
		let Some(url) = &self.url else {
			trace!("notification channel not configured, dropping message");
			return;
		};

		let payload = NotificationPayload { text: message };
		match self.client.post(url).json(&payload).send().await {
			Ok(response) => {
				debug!(status = %response.status(), "notification delivered");
			}
			Err(err) => {
				warn!(error = %err, "failed to deliver notification");
			}
		}
	}

	fn is_configured(&self) -> bool {
		self.url.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::routing::post;
	use axum::{Json, Router};
	use std::sync::Arc;
	use tokio::sync::Mutex;

	#[tokio::test]
	async fn test_unconfigured_notify_is_noop() {
		let notifier = WebhookNotifier::disabled();
		assert!(!notifier.is_configured());
		// Must complete without panicking and without touching the network.
		notifier.notify("nobody is listening").await;
	}

	#[tokio::test]
	async fn test_notify_posts_text_payload() {
		let received: Arc<Mutex<Vec<serde_json::Value>>> = Arc::new(Mutex::new(Vec::new()));
		let sink = Arc::clone(&received);

		let app = Router::new().route(
			"/hook",
			post(move |Json(body): Json<serde_json::Value>| {
				let sink = Arc::clone(&sink);
				async move {
					sink.lock().await.push(body);
					"ok"
				}
			}),
		);

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		tokio::spawn(async move {
			axum::serve(listener, app).await.unwrap();
		});

		let notifier = WebhookNotifier::new(
			Some(format!("http://{addr}/hook")),
			Duration::from_secs(5),
		);
		notifier.notify(":sunny: hello").await;

		let received = received.lock().await;
		assert_eq!(received.len(), 1);
		assert_eq!(received[0]["text"], ":sunny: hello");
	}

	#[tokio::test]
	async fn test_notify_swallows_transport_failure() {
		// Nothing listens on this port; delivery must fail quietly.
		let notifier = WebhookNotifier::new(
			Some("http://127.0.0.1:9/hook".to_string()),
			Duration::from_millis(200),
		);
		notifier.notify("into the void").await;
	}

	#[test]
	fn test_payload_shape() {
		let payload = NotificationPayload { text: "hi" };
		let json = serde_json::to_value(&payload).unwrap();
		assert_eq!(json, serde_json::json!({ "text": "hi" }));
	}
}
