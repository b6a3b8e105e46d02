// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Provisioning stack configuration section.
//!
//! Everything the downstream CloudFormation template needs to bring up the
//! SFTP server: bucket, role, networking, secret reference, and the location
//! of the template itself. The stack name and template URL are derived here
//! so every consumer sees the same identity.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Stack configuration layer (for merging).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StackConfigLayer {
	pub project_name: Option<String>,
	pub region: Option<String>,
	pub template_bucket: Option<String>,
	pub template_object: Option<String>,
	pub s3_bucket: Option<String>,
	pub user_role_arn: Option<String>,
	pub vpc_id: Option<String>,
	pub subnet_id: Option<String>,
	pub subnet_cidr: Option<String>,
	pub eip_allocation_id: Option<String>,
	pub eip_address: Option<String>,
	pub secret_name: Option<String>,
	pub create_timeout_minutes: Option<u32>,
}

impl StackConfigLayer {
	/// Merges another layer on top of this one.
	/// Values from `other` take precedence when present.
	pub fn merge(&mut self, other: StackConfigLayer) {
		if other.project_name.is_some() {
			self.project_name = other.project_name;
		}
		if other.region.is_some() {
			self.region = other.region;
		}
		if other.template_bucket.is_some() {
			self.template_bucket = other.template_bucket;
		}
		if other.template_object.is_some() {
			self.template_object = other.template_object;
		}
		if other.s3_bucket.is_some() {
			self.s3_bucket = other.s3_bucket;
		}
		if other.user_role_arn.is_some() {
			self.user_role_arn = other.user_role_arn;
		}
		if other.vpc_id.is_some() {
			self.vpc_id = other.vpc_id;
		}
		if other.subnet_id.is_some() {
			self.subnet_id = other.subnet_id;
		}
		if other.subnet_cidr.is_some() {
			self.subnet_cidr = other.subnet_cidr;
		}
		if other.eip_allocation_id.is_some() {
			self.eip_allocation_id = other.eip_allocation_id;
		}
		if other.eip_address.is_some() {
			self.eip_address = other.eip_address;
		}
		if other.secret_name.is_some() {
			self.secret_name = other.secret_name;
		}
		if other.create_timeout_minutes.is_some() {
			self.create_timeout_minutes = other.create_timeout_minutes;
		}
	}

	/// Resolves this layer into a runtime configuration.
	///
	/// Fields without a sensible default are required; a lifecycle action
	/// cannot run against a partially specified stack.
	pub fn resolve(self) -> Result<StackConfig, ConfigError> {
		fn required(
			value: Option<String>,
			field: &'static str,
		) -> Result<String, ConfigError> {
			value.ok_or(ConfigError::Missing {
				section: "stack",
				field,
			})
		}

		Ok(StackConfig {
			project_name: self.project_name.unwrap_or_else(|| "wharf".to_string()),
			region: self.region.unwrap_or_else(|| "eu-west-1".to_string()),
			template_bucket: self
				.template_bucket
				.unwrap_or_else(|| "sftp-cloudformation-template-bucket".to_string()),
			template_object: self
				.template_object
				.unwrap_or_else(|| "sftp-server.yaml".to_string()),
			s3_bucket: required(self.s3_bucket, "s3_bucket")?,
			user_role_arn: required(self.user_role_arn, "user_role_arn")?,
			vpc_id: required(self.vpc_id, "vpc_id")?,
			subnet_id: required(self.subnet_id, "subnet_id")?,
			subnet_cidr: required(self.subnet_cidr, "subnet_cidr")?,
			eip_allocation_id: required(self.eip_allocation_id, "eip_allocation_id")?,
			eip_address: required(self.eip_address, "eip_address")?,
			secret_name: required(self.secret_name, "secret_name")?,
			create_timeout_minutes: self.create_timeout_minutes.unwrap_or(10),
		})
	}
}

/// Stack configuration (runtime, resolved).
#[derive(Debug, Clone)]
pub struct StackConfig {
	pub project_name: String,
	pub region: String,
	pub template_bucket: String,
	pub template_object: String,
	pub s3_bucket: String,
	pub user_role_arn: String,
	pub vpc_id: String,
	pub subnet_id: String,
	pub subnet_cidr: String,
	pub eip_allocation_id: String,
	pub eip_address: String,
	pub secret_name: String,
	pub create_timeout_minutes: u32,
}

impl StackConfig {
	/// The logical stack identity. At most one live stack carries this name;
	/// the provisioning backend rejects a duplicate create.
	pub fn stack_name(&self) -> String {
		format!("{}-sftp-server", self.project_name)
	}

	/// Location of the CloudFormation template in the template bucket.
	pub fn template_url(&self) -> String {
		format!(
			"https://{}.s3.{}.amazonaws.com/{}",
			self.template_bucket, self.region, self.template_object
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn complete_layer() -> StackConfigLayer {
		StackConfigLayer {
			project_name: Some("tidepool".to_string()),
			region: None,
			template_bucket: None,
			template_object: None,
			s3_bucket: Some("tidepool-uploads".to_string()),
			user_role_arn: Some("arn:aws:iam::123456789012:role/sftp-user".to_string()),
			vpc_id: Some("vpc-0a1b2c3d".to_string()),
			subnet_id: Some("subnet-0a1b2c3d".to_string()),
			subnet_cidr: Some("10.0.1.0/24".to_string()),
			eip_allocation_id: Some("eipalloc-0a1b2c3d".to_string()),
			eip_address: Some("203.0.113.10".to_string()),
			secret_name: Some("tidepool/sftp".to_string()),
			create_timeout_minutes: None,
		}
	}

	#[test]
	fn test_stack_name_derivation() {
		let config = complete_layer().resolve().unwrap();
		assert_eq!(config.stack_name(), "tidepool-sftp-server");
	}

	#[test]
	fn test_template_url_derivation() {
		let config = complete_layer().resolve().unwrap();
		assert_eq!(
			config.template_url(),
			"https://sftp-cloudformation-template-bucket.s3.eu-west-1.amazonaws.com/sftp-server.yaml"
		);
	}

	#[test]
	fn test_missing_required_field() {
		let mut layer = complete_layer();
		layer.vpc_id = None;
		let err = layer.resolve().unwrap_err();
		assert!(err.to_string().contains("stack.vpc_id"));
	}

	#[test]
	fn test_merge_prefers_other() {
		let mut base = complete_layer();
		base.merge(StackConfigLayer {
			region: Some("us-east-1".to_string()),
			..Default::default()
		});
		assert_eq!(base.region.as_deref(), Some("us-east-1"));
		assert_eq!(base.project_name.as_deref(), Some("tidepool"));
	}

	#[test]
	fn test_create_timeout_default() {
		let config = complete_layer().resolve().unwrap();
		assert_eq!(config.create_timeout_minutes, 10);
	}
}
