// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Storage event payload types, matching the S3 event notification shape.

use serde::Deserialize;

/// A storage-object-created event: a list of records.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadEvent {
	#[serde(rename = "Records", default)]
	pub records: Vec<UploadRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadRecord {
	pub s3: S3Entity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Entity {
	pub bucket: S3Bucket,
	pub object: S3Object,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Bucket {
	pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Object {
	pub key: String,
	/// Object size in bytes; the event source may omit it.
	pub size: Option<u64>,
}

/// HTTP-style outcome returned to the caller regardless of transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome {
	pub status_code: u16,
	pub body: String,
}

impl EventOutcome {
	pub fn ok(body: impl Into<String>) -> Self {
		Self {
			status_code: 200,
			body: body.into(),
		}
	}

	pub fn bad_request(body: impl Into<String>) -> Self {
		Self {
			status_code: 400,
			body: body.into(),
		}
	}
}
