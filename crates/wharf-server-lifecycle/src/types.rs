// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lifecycle request and summary types.

use serde::{Deserialize, Serialize};
use wharf_server_cfn::StackStatus;

use crate::error::LifecycleError;

/// The supported lifecycle actions. `Test` exercises the notification
/// channel without touching the provisioning backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
	Start,
	Stop,
	Test,
}

impl Action {
	/// Parses an action from untrusted input: trimmed, case-insensitive.
	/// Anything unrecognized is a bad request, before any side effect.
	pub fn parse(raw: &str) -> Result<Self, LifecycleError> {
		match raw.trim().to_ascii_lowercase().as_str() {
			"start" => Ok(Action::Start),
			"stop" => Ok(Action::Stop),
			"test" => Ok(Action::Test),
			_ => Err(LifecycleError::InvalidAction(raw.trim().to_string())),
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Action::Start => "start",
			Action::Stop => "stop",
			Action::Test => "test",
		}
	}
}

impl std::fmt::Display for Action {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One lifecycle invocation. Immutable once constructed; a request that
/// fails to parse never reaches the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleRequest {
	pub action: Action,
}

impl LifecycleRequest {
	pub fn new(action: Action) -> Self {
		Self { action }
	}

	pub fn parse(raw: &str) -> Result<Self, LifecycleError> {
		Action::parse(raw).map(Self::new)
	}
}

/// Backend statuses collapsed to what the poll loop cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackPhase {
	/// Creation still underway; keep polling.
	Pending,
	/// Creation finished successfully.
	Succeeded,
	/// Any other terminal state, rollbacks included.
	Failed,
}

impl From<&StackStatus> for StackPhase {
	fn from(status: &StackStatus) -> Self {
		match status {
			StackStatus::CreateInProgress => StackPhase::Pending,
			StackStatus::CreateComplete => StackPhase::Succeeded,
			_ => StackPhase::Failed,
		}
	}
}

/// Outcome label for a completed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleOutcome {
	Started,
	Stopped,
	TestSent,
}

/// What a successful invocation hands back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct LifecycleSummary {
	pub outcome: LifecycleOutcome,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub endpoint: Option<String>,
	pub message: String,
}

impl LifecycleSummary {
	pub fn started(endpoint: String) -> Self {
		Self {
			outcome: LifecycleOutcome::Started,
			endpoint: Some(endpoint),
			message: "SFTP server started".to_string(),
		}
	}

	pub fn stopped() -> Self {
		Self {
			outcome: LifecycleOutcome::Stopped,
			endpoint: None,
			message: "SFTP server stop initiated".to_string(),
		}
	}

	pub fn test_sent() -> Self {
		Self {
			outcome: LifecycleOutcome::TestSent,
			endpoint: None,
			message: "test notification sent".to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_is_trimmed_and_case_insensitive() {
		assert_eq!(Action::parse(" Start ").unwrap(), Action::Start);
		assert_eq!(Action::parse("STOP").unwrap(), Action::Stop);
		assert_eq!(Action::parse("test").unwrap(), Action::Test);
	}

	#[test]
	fn test_parse_rejects_unknown_actions() {
		for raw in ["restart", "", "  ", "star"] {
			let err = LifecycleRequest::parse(raw).unwrap_err();
			assert!(matches!(err, LifecycleError::InvalidAction(_)));
		}
	}

	#[test]
	fn test_phase_pending_only_while_create_in_progress() {
		assert_eq!(
			StackPhase::from(&StackStatus::CreateInProgress),
			StackPhase::Pending
		);
		assert_eq!(
			StackPhase::from(&StackStatus::CreateComplete),
			StackPhase::Succeeded
		);
		for status in [
			StackStatus::CreateFailed,
			StackStatus::RollbackInProgress,
			StackStatus::RollbackComplete,
			StackStatus::DeleteInProgress,
			StackStatus::Other("UPDATE_IN_PROGRESS".to_string()),
		] {
			assert_eq!(StackPhase::from(&status), StackPhase::Failed);
		}
	}

	#[test]
	fn test_summary_serialization_omits_absent_endpoint() {
		let json = serde_json::to_value(LifecycleSummary::stopped()).unwrap();
		assert_eq!(json["outcome"], "stopped");
		assert!(json.get("endpoint").is_none());
	}
}
