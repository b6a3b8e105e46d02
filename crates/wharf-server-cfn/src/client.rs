// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The `StackBackend` trait and its CloudFormation implementation.
//!
//! This is a thin pass-through: no retries, no status interpretation. The
//! only intelligence here is mapping the SDK's error surface onto
//! [`CfnError`] so callers can distinguish a duplicate create from a
//! transport fault.

use async_trait::async_trait;
use aws_sdk_cloudformation::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_cloudformation::operation::describe_stacks::{DescribeStacksError, DescribeStacksOutput};
use aws_sdk_cloudformation::types::{Capability, Parameter, Stack};
use aws_sdk_cloudformation::Client;
use tracing::{debug, info};

use crate::error::{CfnError, CfnResult};
use crate::types::{StackOutputs, StackSpec, StackStatus};

/// Call surface over the stack orchestration API.
///
/// Implemented by [`CloudFormationBackend`] in production and by in-memory
/// fakes in tests.
#[async_trait]
pub trait StackBackend: Send + Sync {
	/// Request creation of a stack. Fails with [`CfnError::AlreadyExists`]
	/// when a stack with the same name is already live.
	async fn create_stack(&self, spec: &StackSpec) -> CfnResult<()>;

	/// Request deletion of a stack. Success means the backend accepted the
	/// request, not that teardown finished.
	async fn delete_stack(&self, name: &str) -> CfnResult<()>;

	/// Report the stack's current status.
	async fn stack_status(&self, name: &str) -> CfnResult<StackStatus>;

	/// Fetch the stack's outputs.
	async fn stack_outputs(&self, name: &str) -> CfnResult<StackOutputs>;
}

/// CloudFormation-backed implementation of [`StackBackend`].
#[derive(Debug, Clone)]
pub struct CloudFormationBackend {
	client: Client,
}

impl CloudFormationBackend {
	pub fn new(client: Client) -> Self {
		Self { client }
	}

	/// Builds a client from the ambient AWS environment (credentials chain,
	/// profile, instance role) pinned to the given region.
	pub async fn from_env(region: impl Into<String>) -> Self {
		let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
			.region(aws_config::Region::new(region.into()))
			.load()
			.await;
		Self::new(Client::new(&config))
	}

	async fn describe(&self, name: &str) -> CfnResult<DescribeStacksOutput> {
		self.client
			.describe_stacks()
			.stack_name(name)
			.send()
			.await
			.map_err(|err| describe_error(name, err))
	}
}

#[async_trait]
impl StackBackend for CloudFormationBackend {
	async fn create_stack(&self, spec: &StackSpec) -> CfnResult<()> {
		let mut request = self
			.client
			.create_stack()
			.stack_name(&spec.name)
			.template_url(&spec.template_url)
			.timeout_in_minutes(spec.timeout_minutes as i32)
			.capabilities(Capability::CapabilityNamedIam);

		for parameter in &spec.parameters {
			request = request.parameters(
				Parameter::builder()
					.parameter_key(&parameter.key)
					.parameter_value(&parameter.value)
					.build(),
			);
		}

		match request.send().await {
			Ok(_) => {
				info!(stack = %spec.name, "stack creation accepted");
				Ok(())
			}
			Err(err) => {
				let service = err.into_service_error();
				if service.is_already_exists_exception() {
					Err(CfnError::AlreadyExists {
						name: spec.name.clone(),
					})
				} else {
					Err(CfnError::Api {
						message: service_message(&service),
					})
				}
			}
		}
	}

	async fn delete_stack(&self, name: &str) -> CfnResult<()> {
		self.client
			.delete_stack()
			.stack_name(name)
			.send()
			.await
			.map_err(|err| CfnError::Api {
				message: service_message(&err.into_service_error()),
			})?;
		info!(stack = %name, "stack deletion accepted");
		Ok(())
	}

	async fn stack_status(&self, name: &str) -> CfnResult<StackStatus> {
		let response = self.describe(name).await?;
		let stack = first_stack(name, &response)?;
		let status = stack.stack_status().ok_or_else(|| CfnError::Api {
			message: format!("stack {name} reported no status"),
		})?;
		let status = StackStatus::parse(status.as_str());
		debug!(stack = %name, status = %status, "described stack status");
		Ok(status)
	}

	async fn stack_outputs(&self, name: &str) -> CfnResult<StackOutputs> {
		let response = self.describe(name).await?;
		let stack = first_stack(name, &response)?;
		let outputs = stack
			.outputs()
			.iter()
			.filter_map(|output| match (output.output_key(), output.output_value()) {
				(Some(key), Some(value)) => Some((key.to_string(), value.to_string())),
				_ => None,
			})
			.collect();
		Ok(outputs)
	}
}

fn first_stack<'a>(name: &str, response: &'a DescribeStacksOutput) -> CfnResult<&'a Stack> {
	response
		.stacks()
		.first()
		.ok_or_else(|| CfnError::StackNotFound {
			name: name.to_string(),
		})
}

fn describe_error(name: &str, err: SdkError<DescribeStacksError>) -> CfnError {
	let service = err.into_service_error();
	let message = service_message(&service);
	// CloudFormation reports a missing stack as a generic validation error.
	if message.contains("does not exist") {
		CfnError::StackNotFound {
			name: name.to_string(),
		}
	} else {
		CfnError::Api { message }
	}
}

fn service_message<E>(err: &E) -> String
where
	E: ProvideErrorMetadata + std::fmt::Display,
{
	match err.meta().message() {
		Some(message) => message.to_string(),
		None => err.to_string(),
	}
}
