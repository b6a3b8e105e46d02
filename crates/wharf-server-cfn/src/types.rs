// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed inputs and outputs for stack operations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Key/value pairs exposed by a successfully created stack.
pub type StackOutputs = HashMap<String, String>;

/// A single template parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackParameter {
	pub key: String,
	pub value: String,
}

impl StackParameter {
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
		}
	}
}

/// Everything a create-stack call needs.
#[derive(Debug, Clone)]
pub struct StackSpec {
	/// Logical stack name; the backend enforces uniqueness on it.
	pub name: String,
	/// HTTPS location of the template document.
	pub template_url: String,
	/// Template parameters, passed through verbatim.
	pub parameters: Vec<StackParameter>,
	/// Backend-side creation timeout in minutes.
	pub timeout_minutes: u32,
}

/// Backend-reported stack status, as raw as we keep it.
///
/// Interpretation (which statuses mean "keep waiting" vs "done") belongs to
/// the caller; unrecognized values are preserved rather than dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackStatus {
	CreateInProgress,
	CreateComplete,
	CreateFailed,
	RollbackInProgress,
	RollbackComplete,
	RollbackFailed,
	DeleteInProgress,
	DeleteComplete,
	DeleteFailed,
	Other(String),
}

impl StackStatus {
	pub fn parse(raw: &str) -> Self {
		match raw {
			"CREATE_IN_PROGRESS" => StackStatus::CreateInProgress,
			"CREATE_COMPLETE" => StackStatus::CreateComplete,
			"CREATE_FAILED" => StackStatus::CreateFailed,
			"ROLLBACK_IN_PROGRESS" => StackStatus::RollbackInProgress,
			"ROLLBACK_COMPLETE" => StackStatus::RollbackComplete,
			"ROLLBACK_FAILED" => StackStatus::RollbackFailed,
			"DELETE_IN_PROGRESS" => StackStatus::DeleteInProgress,
			"DELETE_COMPLETE" => StackStatus::DeleteComplete,
			"DELETE_FAILED" => StackStatus::DeleteFailed,
			other => StackStatus::Other(other.to_string()),
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			StackStatus::CreateInProgress => "CREATE_IN_PROGRESS",
			StackStatus::CreateComplete => "CREATE_COMPLETE",
			StackStatus::CreateFailed => "CREATE_FAILED",
			StackStatus::RollbackInProgress => "ROLLBACK_IN_PROGRESS",
			StackStatus::RollbackComplete => "ROLLBACK_COMPLETE",
			StackStatus::RollbackFailed => "ROLLBACK_FAILED",
			StackStatus::DeleteInProgress => "DELETE_IN_PROGRESS",
			StackStatus::DeleteComplete => "DELETE_COMPLETE",
			StackStatus::DeleteFailed => "DELETE_FAILED",
			StackStatus::Other(raw) => raw,
		}
	}
}

impl std::fmt::Display for StackStatus {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_known_statuses() {
		assert_eq!(
			StackStatus::parse("CREATE_IN_PROGRESS"),
			StackStatus::CreateInProgress
		);
		assert_eq!(
			StackStatus::parse("CREATE_COMPLETE"),
			StackStatus::CreateComplete
		);
		assert_eq!(
			StackStatus::parse("ROLLBACK_COMPLETE"),
			StackStatus::RollbackComplete
		);
	}

	#[test]
	fn test_parse_preserves_unknown_status() {
		let status = StackStatus::parse("UPDATE_IN_PROGRESS");
		assert_eq!(status, StackStatus::Other("UPDATE_IN_PROGRESS".to_string()));
		assert_eq!(status.as_str(), "UPDATE_IN_PROGRESS");
	}

	#[test]
	fn test_display_matches_wire_format() {
		assert_eq!(StackStatus::CreateFailed.to_string(), "CREATE_FAILED");
	}
}
