// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! CloudFormation client abstraction for wharf stack provisioning.
//!
//! This crate provides a thin typed call surface over the external stack
//! orchestration API: create, delete, describe-status, describe-outputs.
//! Policy — polling, backoff, status interpretation — lives with the caller.

pub mod client;
pub mod error;
pub mod types;

pub use client::{CloudFormationBackend, StackBackend};
pub use error::{CfnError, CfnResult};
pub use types::{StackOutputs, StackParameter, StackSpec, StackStatus};
