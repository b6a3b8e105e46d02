// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lifecycle error taxonomy.

use std::time::Duration;

use wharf_server_cfn::{CfnError, StackStatus};

/// Errors a lifecycle invocation can end in.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
	/// The action was missing or unsupported. Fails fast: no backend call,
	/// no notification.
	#[error("missing or unsupported action: {0:?} (available actions are: start, stop and test)")]
	InvalidAction(String),

	/// A stack with the same identity is already live.
	#[error("stack already exists: {name}")]
	Conflict { name: String },

	/// The stack reached a terminal status other than success.
	#[error("stack creation failed with status {status}")]
	CreateFailed { status: StackStatus },

	/// The backend reported success but the required output was absent.
	/// This is a broken backend contract, not a missing default.
	#[error("stack outputs missing required key {key}")]
	MissingOutput { key: &'static str },

	/// The creation wait deadline expired while the stack was still pending.
	#[error("timed out after {}s waiting for stack creation", .waited.as_secs())]
	Timeout { waited: Duration },

	/// Cancellation was requested while waiting.
	#[error("stack creation wait cancelled")]
	Cancelled,

	/// Any other provisioning backend fault.
	#[error(transparent)]
	Backend(#[from] CfnError),
}

impl LifecycleError {
	/// Short machine-readable label for response bodies and logs.
	pub fn kind(&self) -> &'static str {
		match self {
			LifecycleError::InvalidAction(_) => "bad_request",
			LifecycleError::Conflict { .. } => "conflict",
			LifecycleError::CreateFailed { .. } => "create_failed",
			LifecycleError::MissingOutput { .. } => "integrity",
			LifecycleError::Timeout { .. } => "timeout",
			LifecycleError::Cancelled => "cancelled",
			LifecycleError::Backend(_) => "backend",
		}
	}

	/// Bad requests fail before any side effect and map to HTTP 400;
	/// everything else is a server-side failure.
	pub fn is_bad_request(&self) -> bool {
		matches!(self, LifecycleError::InvalidAction(_))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_kind_labels() {
		assert_eq!(
			LifecycleError::InvalidAction("restart".to_string()).kind(),
			"bad_request"
		);
		assert_eq!(
			LifecycleError::Conflict {
				name: "x".to_string()
			}
			.kind(),
			"conflict"
		);
		assert_eq!(
			LifecycleError::MissingOutput { key: "SFTPServerId" }.kind(),
			"integrity"
		);
	}

	#[test]
	fn test_only_invalid_action_is_bad_request() {
		assert!(LifecycleError::InvalidAction(String::new()).is_bad_request());
		assert!(!LifecycleError::Cancelled.is_bad_request());
		assert!(!LifecycleError::Timeout {
			waited: Duration::from_secs(600)
		}
		.is_bad_request());
	}
}
