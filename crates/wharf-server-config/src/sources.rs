// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, TOML files, and environment
//! variables, merged in precedence order.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::debug;

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{
	HttpConfigLayer, LifecycleConfigLayer, LoggingConfigLayer, NotifyConfigLayer, StackConfigLayer,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/wharf/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})
	}
}

/// Environment variable source.
///
/// Convention: `WHARF_SERVER_<SECTION>_<FIELD>`.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ServerConfigLayer {
			http: Some(load_http_from_env()?),
			stack: Some(load_stack_from_env()?),
			lifecycle: Some(load_lifecycle_from_env()?),
			notify: Some(load_notify_from_env()?),
			logging: Some(load_logging_from_env()),
		})
	}
}

fn env_string(key: &'static str) -> Option<String> {
	std::env::var(key).ok().filter(|value| !value.is_empty())
}

fn env_parse<T>(key: &'static str) -> Result<Option<T>, ConfigError>
where
	T: FromStr,
	T::Err: Display,
{
	match env_string(key) {
		None => Ok(None),
		Some(raw) => raw.parse().map(Some).map_err(|e: T::Err| ConfigError::InvalidEnv {
			key,
			message: e.to_string(),
		}),
	}
}

fn load_http_from_env() -> Result<HttpConfigLayer, ConfigError> {
	Ok(HttpConfigLayer {
		host: env_string("WHARF_SERVER_HTTP_HOST"),
		port: env_parse("WHARF_SERVER_HTTP_PORT")?,
	})
}

fn load_stack_from_env() -> Result<StackConfigLayer, ConfigError> {
	Ok(StackConfigLayer {
		project_name: env_string("WHARF_SERVER_STACK_PROJECT_NAME"),
		region: env_string("WHARF_SERVER_STACK_REGION"),
		template_bucket: env_string("WHARF_SERVER_STACK_TEMPLATE_BUCKET"),
		template_object: env_string("WHARF_SERVER_STACK_TEMPLATE_OBJECT"),
		s3_bucket: env_string("WHARF_SERVER_STACK_S3_BUCKET"),
		user_role_arn: env_string("WHARF_SERVER_STACK_USER_ROLE_ARN"),
		vpc_id: env_string("WHARF_SERVER_STACK_VPC_ID"),
		subnet_id: env_string("WHARF_SERVER_STACK_SUBNET_ID"),
		subnet_cidr: env_string("WHARF_SERVER_STACK_SUBNET_CIDR"),
		eip_allocation_id: env_string("WHARF_SERVER_STACK_EIP_ALLOCATION_ID"),
		eip_address: env_string("WHARF_SERVER_STACK_EIP_ADDRESS"),
		secret_name: env_string("WHARF_SERVER_STACK_SECRET_NAME"),
		create_timeout_minutes: env_parse("WHARF_SERVER_STACK_CREATE_TIMEOUT_MINUTES")?,
	})
}

fn load_lifecycle_from_env() -> Result<LifecycleConfigLayer, ConfigError> {
	Ok(LifecycleConfigLayer {
		poll_interval_secs: env_parse("WHARF_SERVER_LIFECYCLE_POLL_INTERVAL_SECS")?,
		create_timeout_secs: env_parse("WHARF_SERVER_LIFECYCLE_CREATE_TIMEOUT_SECS")?,
	})
}

fn load_notify_from_env() -> Result<NotifyConfigLayer, ConfigError> {
	Ok(NotifyConfigLayer {
		webhook_url: env_string("WHARF_SERVER_NOTIFY_WEBHOOK_URL"),
		timeout_secs: env_parse("WHARF_SERVER_NOTIFY_TIMEOUT_SECS")?,
	})
}

fn load_logging_from_env() -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: env_string("WHARF_SERVER_LOG_LEVEL"),
	}
}
