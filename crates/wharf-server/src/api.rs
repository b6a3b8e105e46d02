// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router assembly.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use wharf_server_cfn::{StackBackend, StackParameter, StackSpec};
use wharf_server_config::{ServerConfig, StackConfig};
use wharf_server_lifecycle::LifecycleController;
use wharf_server_notify::{Notifier, WebhookNotifier};

use crate::routes;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
	pub config: Arc<ServerConfig>,
	pub controller: Arc<LifecycleController>,
	pub notifier: Arc<dyn Notifier>,
}

/// Derives the create-stack input from configuration.
///
/// Every parameter the downstream template consumes comes from here and only
/// from here, so a given configuration always produces the same call.
pub fn stack_spec(stack: &StackConfig) -> StackSpec {
	StackSpec {
		name: stack.stack_name(),
		template_url: stack.template_url(),
		parameters: vec![
			StackParameter::new("ProjectName", stack.project_name.as_str()),
			StackParameter::new("S3Bucket", stack.s3_bucket.as_str()),
			StackParameter::new("UserRoleArn", stack.user_role_arn.as_str()),
			StackParameter::new("VpcId", stack.vpc_id.as_str()),
			StackParameter::new("SubnetId", stack.subnet_id.as_str()),
			StackParameter::new("SubnetCidr", stack.subnet_cidr.as_str()),
			StackParameter::new("EIPAllocationId", stack.eip_allocation_id.as_str()),
			StackParameter::new("EIPAddress", stack.eip_address.as_str()),
			StackParameter::new("TemplateBucket", stack.template_bucket.as_str()),
			StackParameter::new("SecretName", stack.secret_name.as_str()),
		],
		timeout_minutes: stack.create_timeout_minutes,
	}
}

/// Creates the application state from resolved configuration and a backend.
pub fn create_app_state(config: ServerConfig, backend: Arc<dyn StackBackend>) -> AppState {
	let notifier: Arc<dyn Notifier> = Arc::new(WebhookNotifier::new(
		config.notify.webhook_url.clone(),
		Duration::from_secs(config.notify.timeout_secs),
	));

	let controller = Arc::new(LifecycleController::new(
		backend,
		Arc::clone(&notifier),
		stack_spec(&config.stack),
		Duration::from_secs(config.lifecycle.poll_interval_secs),
		Duration::from_secs(config.lifecycle.create_timeout_secs),
	));

	AppState {
		config: Arc::new(config),
		controller,
		notifier,
	}
}

/// Assembles the HTTP router.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/v1/lifecycle", post(routes::lifecycle::invoke_lifecycle))
		.route(
			"/v1/events/upload",
			post(routes::uploads::receive_upload_event),
		)
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}
