// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The mergeable configuration layer covering every section.

use serde::{Deserialize, Serialize};

use crate::sections::{
	HttpConfigLayer, LifecycleConfigLayer, LoggingConfigLayer, NotifyConfigLayer, StackConfigLayer,
};

/// One layer of server configuration, as produced by a single source.
///
/// All fields are optional so layers from defaults, file, and environment can
/// be merged with later sources taking precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfigLayer {
	pub http: Option<HttpConfigLayer>,
	pub stack: Option<StackConfigLayer>,
	pub lifecycle: Option<LifecycleConfigLayer>,
	pub notify: Option<NotifyConfigLayer>,
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	/// Merges another layer on top of this one, section by section.
	pub fn merge(&mut self, other: ServerConfigLayer) {
		merge_section(&mut self.http, other.http, HttpConfigLayer::merge);
		merge_section(&mut self.stack, other.stack, StackConfigLayer::merge);
		merge_section(
			&mut self.lifecycle,
			other.lifecycle,
			LifecycleConfigLayer::merge,
		);
		merge_section(&mut self.notify, other.notify, NotifyConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: impl FnOnce(&mut T, T)) {
	match (base.as_mut(), other) {
		(Some(base), Some(other)) => merge(base, other),
		(None, Some(other)) => *base = Some(other),
		(_, None) => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_fills_missing_sections() {
		let mut base = ServerConfigLayer::default();
		base.merge(ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: Some("0.0.0.0".to_string()),
				port: None,
			}),
			..Default::default()
		});
		assert_eq!(base.http.unwrap().host.as_deref(), Some("0.0.0.0"));
	}

	#[test]
	fn test_merge_is_field_wise_within_sections() {
		let mut base = ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: Some("0.0.0.0".to_string()),
				port: Some(9000),
			}),
			..Default::default()
		};
		base.merge(ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: None,
				port: Some(8081),
			}),
			..Default::default()
		});
		let http = base.http.unwrap();
		assert_eq!(http.host.as_deref(), Some("0.0.0.0"));
		assert_eq!(http.port, Some(8081));
	}
}
