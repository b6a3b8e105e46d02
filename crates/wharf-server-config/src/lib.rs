// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the wharf server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`WHARF_SERVER_*`)
//!
//! Configuration is resolved once at startup into an immutable [`ServerConfig`]
//! value object that is passed by reference into constructors; nothing reads
//! the process environment after load.
//!
//! # Usage
//!
//! ```ignore
//! use wharf_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}:{}", config.http.host, config.http.port);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub stack: StackConfig,
	pub lifecycle: LifecycleConfig,
	pub notify: NotifyConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`WHARF_SERVER_*`)
/// 2. Config file (`/etc/wharf/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![Box::new(DefaultsSource), Box::new(EnvSource)])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layers into a resolved config.
pub fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let stack = layer.stack.unwrap_or_default().resolve()?;
	let lifecycle = layer.lifecycle.unwrap_or_default().finalize();
	let notify = layer.notify.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&lifecycle)?;

	info!(
		host = %http.host,
		port = http.port,
		stack = %stack.stack_name(),
		region = %stack.region,
		poll_interval_secs = lifecycle.poll_interval_secs,
		create_timeout_secs = lifecycle.create_timeout_secs,
		notify_configured = notify.is_configured(),
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		stack,
		lifecycle,
		notify,
		logging,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(lifecycle: &LifecycleConfig) -> Result<(), ConfigError> {
	if lifecycle.poll_interval_secs == 0 {
		return Err(ConfigError::Validation(
			"lifecycle.poll_interval_secs must be greater than zero".to_string(),
		));
	}
	if lifecycle.create_timeout_secs < lifecycle.poll_interval_secs {
		return Err(ConfigError::Validation(format!(
			"lifecycle.create_timeout_secs ({}) is shorter than the poll interval ({})",
			lifecycle.create_timeout_secs, lifecycle.poll_interval_secs
		)));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn complete_stack_layer() -> StackConfigLayer {
		StackConfigLayer {
			project_name: Some("tidepool".to_string()),
			s3_bucket: Some("tidepool-uploads".to_string()),
			user_role_arn: Some("arn:aws:iam::123456789012:role/sftp-user".to_string()),
			vpc_id: Some("vpc-0a1b2c3d".to_string()),
			subnet_id: Some("subnet-0a1b2c3d".to_string()),
			subnet_cidr: Some("10.0.1.0/24".to_string()),
			eip_allocation_id: Some("eipalloc-0a1b2c3d".to_string()),
			eip_address: Some("203.0.113.10".to_string()),
			secret_name: Some("tidepool/sftp".to_string()),
			..Default::default()
		}
	}

	#[test]
	fn test_finalize_with_complete_stack() {
		let config = finalize(ServerConfigLayer {
			stack: Some(complete_stack_layer()),
			..Default::default()
		})
		.unwrap();
		assert_eq!(config.stack.stack_name(), "tidepool-sftp-server");
		assert_eq!(config.lifecycle.poll_interval_secs, 10);
		assert!(!config.notify.is_configured());
	}

	#[test]
	fn test_finalize_missing_stack_field_fails() {
		let err = finalize(ServerConfigLayer::default()).unwrap_err();
		assert!(matches!(err, ConfigError::Missing { section: "stack", .. }));
	}

	#[test]
	fn test_zero_poll_interval_rejected() {
		let err = finalize(ServerConfigLayer {
			stack: Some(complete_stack_layer()),
			lifecycle: Some(LifecycleConfigLayer {
				poll_interval_secs: Some(0),
				create_timeout_secs: None,
			}),
			..Default::default()
		})
		.unwrap_err();
		assert!(err.to_string().contains("poll_interval_secs"));
	}

	#[test]
	fn test_timeout_shorter_than_interval_rejected() {
		let err = finalize(ServerConfigLayer {
			stack: Some(complete_stack_layer()),
			lifecycle: Some(LifecycleConfigLayer {
				poll_interval_secs: Some(30),
				create_timeout_secs: Some(5),
			}),
			..Default::default()
		})
		.unwrap_err();
		assert!(matches!(err, ConfigError::Validation(_)));
	}

	#[test]
	fn test_socket_addr() {
		let config = finalize(ServerConfigLayer {
			stack: Some(complete_stack_layer()),
			http: Some(HttpConfigLayer {
				host: Some("0.0.0.0".to_string()),
				port: Some(9000),
			}),
			..Default::default()
		})
		.unwrap();
		assert_eq!(config.socket_addr(), "0.0.0.0:9000");
	}

	#[test]
	fn test_layer_precedence_env_over_file() {
		// Simulate the merge order without touching the process environment.
		let mut merged = ServerConfigLayer::default();
		merged.merge(ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: Some("file-host".to_string()),
				port: Some(1000),
			}),
			..Default::default()
		});
		merged.merge(ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: Some("env-host".to_string()),
				port: None,
			}),
			..Default::default()
		});
		let http = merged.http.unwrap();
		assert_eq!(http.host.as_deref(), Some("env-host"));
		assert_eq!(http.port, Some(1000));
	}
}
