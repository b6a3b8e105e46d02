// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Turning upload records into notification messages.
//!
//! SFTP users land their files under `<username>/...`, so the first path
//! segment of the object key names the uploader. A key with no separator has
//! no attributable user and reports the `unknown` sentinel.

use tracing::{info, instrument, warn};
use wharf_server_notify::Notifier;

use crate::types::{EventOutcome, UploadEvent, UploadRecord};

const UNKNOWN_USER: &str = "unknown";

/// Derives the uploading user from the object key.
pub fn uploaded_by(key: &str) -> &str {
	let mut segments = key.split('/');
	match (segments.next(), segments.next()) {
		(Some(first), Some(_)) => first,
		_ => UNKNOWN_USER,
	}
}

/// Derives the bare filename from the object key.
pub fn filename(key: &str) -> &str {
	key.rsplit('/').next().unwrap_or(key)
}

/// Formats one record as a notification message.
pub fn format_message(record: &UploadRecord) -> String {
	let size = record
		.s3
		.object
		.size
		.map(|bytes| bytes.to_string())
		.unwrap_or_else(|| "unknown".to_string());

	format!(
		":inbox_tray: *New file uploaded*\n*Bucket:* `{}`\n*User:* `{}`\n*File:* `{}`\n*Size:* `{}` bytes",
		record.s3.bucket.name,
		uploaded_by(&record.s3.object.key),
		filename(&record.s3.object.key),
		size
	)
}

/// Translates an upload event into notifications, one per record.
///
/// Returns an HTTP-style outcome; the transport (HTTP route, CLI, queue
/// consumer) maps it onto its own response type.
#[instrument(skip(event, notifier), fields(records = event.records.len()))]
pub async fn handle_event(event: &UploadEvent, notifier: &dyn Notifier) -> EventOutcome {
	if event.records.is_empty() {
		warn!("upload event carried no records");
		return EventOutcome::bad_request("no records in event");
	}

	for record in &event.records {
		info!(
			bucket = %record.s3.bucket.name,
			key = %record.s3.object.key,
			"forwarding upload notification"
		);
		notifier.notify(&format_message(record)).await;
	}

	EventOutcome::ok(format!(
		"{} notification(s) sent",
		event.records.len()
	))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::{S3Bucket, S3Entity, S3Object};
	use async_trait::async_trait;
	use std::sync::Mutex;

	struct RecordingNotifier {
		messages: Mutex<Vec<String>>,
	}

	impl RecordingNotifier {
		fn new() -> Self {
			Self {
				messages: Mutex::new(Vec::new()),
			}
		}
	}

	#[async_trait]
	impl Notifier for RecordingNotifier {
		async fn notify(&self, message: &str) {
			self.messages.lock().unwrap().push(message.to_string());
		}

		fn is_configured(&self) -> bool {
			true
		}
	}

	fn record(bucket: &str, key: &str, size: Option<u64>) -> UploadRecord {
		UploadRecord {
			s3: S3Entity {
				bucket: S3Bucket {
					name: bucket.to_string(),
				},
				object: S3Object {
					key: key.to_string(),
					size,
				},
			},
		}
	}

	#[test]
	fn test_uploaded_by_first_segment() {
		assert_eq!(uploaded_by("alice/reports/q3.csv"), "alice");
		assert_eq!(uploaded_by("bob/notes.txt"), "bob");
	}

	#[test]
	fn test_uploaded_by_without_separator_is_unknown() {
		assert_eq!(uploaded_by("orphan.txt"), "unknown");
		assert_eq!(uploaded_by(""), "unknown");
	}

	#[test]
	fn test_filename_last_segment() {
		assert_eq!(filename("alice/reports/q3.csv"), "q3.csv");
		assert_eq!(filename("orphan.txt"), "orphan.txt");
	}

	#[test]
	fn test_format_message_includes_fields() {
		let message = format_message(&record("uploads", "alice/q3.csv", Some(2048)));
		assert!(message.contains("`uploads`"));
		assert!(message.contains("`alice`"));
		assert!(message.contains("`q3.csv`"));
		assert!(message.contains("`2048` bytes"));
	}

	#[test]
	fn test_format_message_missing_size() {
		let message = format_message(&record("uploads", "alice/q3.csv", None));
		assert!(message.contains("`unknown` bytes"));
	}

	#[tokio::test]
	async fn test_handle_event_empty_records_is_bad_request() {
		let notifier = RecordingNotifier::new();
		let outcome = handle_event(&UploadEvent { records: vec![] }, &notifier).await;
		assert_eq!(outcome.status_code, 400);
		assert!(notifier.messages.lock().unwrap().is_empty());
	}

	#[tokio::test]
	async fn test_handle_event_notifies_per_record() {
		let notifier = RecordingNotifier::new();
		let event = UploadEvent {
			records: vec![
				record("uploads", "alice/a.txt", Some(1)),
				record("uploads", "bob/b.txt", Some(2)),
			],
		};
		let outcome = handle_event(&event, &notifier).await;
		assert_eq!(outcome.status_code, 200);
		assert!(outcome.body.contains("2 notification(s)"));
		let messages = notifier.messages.lock().unwrap();
		assert_eq!(messages.len(), 2);
		assert!(messages[0].contains("`alice`"));
		assert!(messages[1].contains("`bob`"));
	}

	#[test]
	fn test_event_deserializes_from_s3_shape() {
		let event: UploadEvent = serde_json::from_str(
			r#"{
				"Records": [
					{
						"s3": {
							"bucket": { "name": "uploads" },
							"object": { "key": "alice/q3.csv", "size": 2048 }
						}
					}
				]
			}"#,
		)
		.unwrap();
		assert_eq!(event.records.len(), 1);
		assert_eq!(event.records[0].s3.object.size, Some(2048));
	}
}
