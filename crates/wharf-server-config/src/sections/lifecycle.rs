// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lifecycle controller configuration section.

use serde::{Deserialize, Serialize};

/// Lifecycle configuration layer (for merging).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LifecycleConfigLayer {
	pub poll_interval_secs: Option<u64>,
	pub create_timeout_secs: Option<u64>,
}

impl LifecycleConfigLayer {
	/// Merges another layer on top of this one.
	/// Values from `other` take precedence when present.
	pub fn merge(&mut self, other: LifecycleConfigLayer) {
		if other.poll_interval_secs.is_some() {
			self.poll_interval_secs = other.poll_interval_secs;
		}
		if other.create_timeout_secs.is_some() {
			self.create_timeout_secs = other.create_timeout_secs;
		}
	}

	/// Resolves this layer into a runtime configuration.
	pub fn finalize(self) -> LifecycleConfig {
		LifecycleConfig {
			poll_interval_secs: self.poll_interval_secs.unwrap_or(10),
			create_timeout_secs: self.create_timeout_secs.unwrap_or(600),
		}
	}
}

/// Lifecycle configuration (runtime, resolved).
///
/// `create_timeout_secs` bounds the stack-creation wait; on expiry the
/// controller reports a timeout instead of polling forever.
#[derive(Debug, Clone)]
pub struct LifecycleConfig {
	pub poll_interval_secs: u64,
	pub create_timeout_secs: u64,
}

impl Default for LifecycleConfig {
	fn default() -> Self {
		LifecycleConfigLayer::default().finalize()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_finalize_defaults() {
		let config = LifecycleConfigLayer::default().finalize();
		assert_eq!(config.poll_interval_secs, 10);
		assert_eq!(config.create_timeout_secs, 600);
	}

	#[test]
	fn test_merge_prefers_other() {
		let mut base = LifecycleConfigLayer {
			poll_interval_secs: Some(5),
			create_timeout_secs: None,
		};
		base.merge(LifecycleConfigLayer {
			poll_interval_secs: None,
			create_timeout_secs: Some(120),
		});
		assert_eq!(base.poll_interval_secs, Some(5));
		assert_eq!(base.create_timeout_secs, Some(120));
	}
}
