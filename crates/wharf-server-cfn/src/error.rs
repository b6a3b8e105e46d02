// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Result type alias for CloudFormation operations.
pub type CfnResult<T> = Result<T, CfnError>;

/// Errors that can occur during CloudFormation operations.
///
/// "Already exists" is surfaced as its own variant so callers can branch on
/// a duplicate create instead of treating it as an opaque API fault.
#[derive(Error, Debug)]
pub enum CfnError {
	#[error("stack already exists: {name}")]
	AlreadyExists { name: String },

	#[error("stack not found: {name}")]
	StackNotFound { name: String },

	#[error("CloudFormation API error: {message}")]
	Api { message: String },
}
