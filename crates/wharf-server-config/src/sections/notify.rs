// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Notification channel configuration section.
//!
//! The webhook URL doubles as a credential (Slack-style incoming webhooks
//! embed a token in the path), so it is redacted from `Debug` output.

use serde::{Deserialize, Serialize};

/// Notification configuration layer (for merging).
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct NotifyConfigLayer {
	pub webhook_url: Option<String>,
	pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for NotifyConfigLayer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NotifyConfigLayer")
			.field("webhook_url", &self.webhook_url.as_ref().map(|_| "[REDACTED]"))
			.field("timeout_secs", &self.timeout_secs)
			.finish()
	}
}

impl NotifyConfigLayer {
	/// Merges another layer on top of this one.
	/// Values from `other` take precedence when present.
	pub fn merge(&mut self, other: NotifyConfigLayer) {
		if other.webhook_url.is_some() {
			self.webhook_url = other.webhook_url;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}

	/// Resolves this layer into a runtime configuration.
	///
	/// An absent webhook URL is a valid deployment: the notifier becomes a
	/// no-op rather than an error.
	pub fn finalize(self) -> NotifyConfig {
		NotifyConfig {
			webhook_url: self.webhook_url,
			timeout_secs: self.timeout_secs.unwrap_or(10),
		}
	}
}

/// Notification configuration (runtime, resolved).
#[derive(Clone)]
pub struct NotifyConfig {
	pub webhook_url: Option<String>,
	pub timeout_secs: u64,
}

impl std::fmt::Debug for NotifyConfig {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NotifyConfig")
			.field("webhook_url", &self.webhook_url.as_ref().map(|_| "[REDACTED]"))
			.field("timeout_secs", &self.timeout_secs)
			.finish()
	}
}

impl Default for NotifyConfig {
	fn default() -> Self {
		NotifyConfigLayer::default().finalize()
	}
}

impl NotifyConfig {
	pub fn is_configured(&self) -> bool {
		self.webhook_url.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_debug_redacts_webhook_url() {
		let config = NotifyConfigLayer {
			webhook_url: Some("https://hooks.example.com/services/T000/B000/secret".to_string()),
			timeout_secs: None,
		}
		.finalize();
		let rendered = format!("{config:?}");
		assert!(rendered.contains("[REDACTED]"));
		assert!(!rendered.contains("secret"));
	}

	#[test]
	fn test_unconfigured_is_valid() {
		let config = NotifyConfigLayer::default().finalize();
		assert!(!config.is_configured());
		assert_eq!(config.timeout_secs, 10);
	}
}
