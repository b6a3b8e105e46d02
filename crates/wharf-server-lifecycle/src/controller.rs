// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The lifecycle controller.
//!
//! One invocation drives the provisioning backend through a strictly
//! sequential call sequence: create before the first status poll, poll
//! before the output fetch, output fetch before the success notification.
//! Every terminal outcome attempts exactly one notification; the sole
//! exception is a bad request, which fails before any side effect.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, error, info, instrument};
use wharf_server_cfn::{CfnError, StackBackend, StackSpec, StackStatus};
use wharf_server_notify::Notifier;

use crate::context::CancellationToken;
use crate::error::LifecycleError;
use crate::types::{Action, LifecycleRequest, LifecycleSummary, StackPhase};

/// Output key carrying the provisioned server identifier.
pub const SERVER_ID_OUTPUT: &str = "SFTPServerId";

const MSG_STARTED: &str = ":sunny: *SFTP Server* is *STARTED*";
const MSG_STOPPED: &str = ":zzz: *SFTP Server* is *STOPPED*";
const MSG_CREATE_FAILED: &str = ":rotating_light: *SFTP Server* creation *FAILED*";
const MSG_TEST: &str = "just testing";

/// Drives one lifecycle invocation against the provisioning backend and
/// reports the outcome to the notification channel.
///
/// The controller holds no state across invocations; the backend is the
/// sole source of truth for whether a stack is currently live.
pub struct LifecycleController {
	backend: Arc<dyn StackBackend>,
	notifier: Arc<dyn Notifier>,
	spec: StackSpec,
	poll_interval: Duration,
	create_timeout: Duration,
}

impl LifecycleController {
	pub fn new(
		backend: Arc<dyn StackBackend>,
		notifier: Arc<dyn Notifier>,
		spec: StackSpec,
		poll_interval: Duration,
		create_timeout: Duration,
	) -> Self {
		Self {
			backend,
			notifier,
			spec,
			poll_interval,
			create_timeout,
		}
	}

	/// Handles one lifecycle request to a terminal outcome.
	///
	/// Backend faults never propagate unhandled: they are converted into a
	/// failure notification carrying the error text and returned as a
	/// structured [`LifecycleError`].
	#[instrument(skip(self, cancel), fields(action = %request.action, stack = %self.spec.name))]
	pub async fn handle(
		&self,
		request: LifecycleRequest,
		cancel: &CancellationToken,
	) -> Result<LifecycleSummary, LifecycleError> {
		let result = match request.action {
			Action::Start => self.start(cancel).await,
			Action::Stop => self.stop().await,
			Action::Test => self.test().await,
		};

		match result {
			Ok(summary) => Ok(summary),
			Err(err) => {
				error!(error = %err, kind = err.kind(), "lifecycle action failed");
				self.notifier.notify(&failure_message(&err)).await;
				Err(err)
			}
		}
	}

	async fn start(&self, cancel: &CancellationToken) -> Result<LifecycleSummary, LifecycleError> {
		info!("requesting stack creation");
		self.backend
			.create_stack(&self.spec)
			.await
			.map_err(|err| match err {
				// A live stack with this identity means someone already
				// started the server; never reconcile or merge.
				CfnError::AlreadyExists { name } => LifecycleError::Conflict { name },
				other => LifecycleError::from(other),
			})?;

		let status = self.wait_for_create(cancel).await?;
		if StackPhase::from(&status) != StackPhase::Succeeded {
			return Err(LifecycleError::CreateFailed { status });
		}

		let outputs = self.backend.stack_outputs(&self.spec.name).await?;
		let endpoint = outputs
			.get(SERVER_ID_OUTPUT)
			.cloned()
			.ok_or(LifecycleError::MissingOutput {
				key: SERVER_ID_OUTPUT,
			})?;

		info!(endpoint = %endpoint, "stack creation complete");
		self.notifier.notify(MSG_STARTED).await;
		Ok(LifecycleSummary::started(endpoint))
	}

	/// Polls until the stack leaves the in-progress state, the deadline
	/// expires, or cancellation is requested.
	async fn wait_for_create(
		&self,
		cancel: &CancellationToken,
	) -> Result<StackStatus, LifecycleError> {
		let deadline = Instant::now() + self.create_timeout;

		loop {
			if cancel.is_cancelled() {
				return Err(LifecycleError::Cancelled);
			}
			if Instant::now() >= deadline {
				return Err(LifecycleError::Timeout {
					waited: self.create_timeout,
				});
			}

			tokio::time::sleep(self.poll_interval).await;

			let status = self.backend.stack_status(&self.spec.name).await?;
			if StackPhase::from(&status) != StackPhase::Pending {
				return Ok(status);
			}
			debug!(status = %status, "stack creation still in progress");
		}
	}

	async fn stop(&self) -> Result<LifecycleSummary, LifecycleError> {
		info!("requesting stack deletion");
		self.backend.delete_stack(&self.spec.name).await?;

		// Acceptance of the delete, not its completion, releases the server:
		// the stop path never polls. Best-effort by contract.
		self.notifier.notify(MSG_STOPPED).await;
		Ok(LifecycleSummary::stopped())
	}

	async fn test(&self) -> Result<LifecycleSummary, LifecycleError> {
		self.notifier.notify(MSG_TEST).await;
		Ok(LifecycleSummary::test_sent())
	}
}

fn failure_message(err: &LifecycleError) -> String {
	match err {
		LifecycleError::CreateFailed { .. } => MSG_CREATE_FAILED.to_string(),
		other => format!(":rotating_light: *SFTP Server* lifecycle error: {other}"),
	}
}
