// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! On-demand SFTP server lifecycle controller.
//!
//! This crate implements the core state machine: interpret an action
//! request, drive the provisioning backend through the correct call
//! sequence, poll creation to a terminal status under a deadline, extract
//! the provisioned server identifier, and report the outcome through the
//! notification channel.
//!
//! # Architecture
//!
//! The controller sits between the HTTP API (wharf-server) and the
//! CloudFormation client (wharf-server-cfn), implementing:
//!
//! - Action parsing and fail-fast rejection of bad requests
//! - The bounded create poll loop with cooperative cancellation
//! - Status collapsing and output extraction
//! - Exactly-one-notification-per-terminal-outcome discipline

pub mod context;
pub mod controller;
pub mod error;
pub mod types;

pub use context::CancellationToken;
pub use controller::{LifecycleController, SERVER_ID_OUTPUT};
pub use error::LifecycleError;
pub use types::{Action, LifecycleOutcome, LifecycleRequest, LifecycleSummary, StackPhase};
