// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Upload event to notification translator.
//!
//! A stateless one-shot transform: a storage-object-created record list goes
//! in, one notification per record goes out, and an HTTP-style outcome comes
//! back whatever the transport.

pub mod translate;
pub mod types;

pub use translate::{filename, format_message, handle_event, uploaded_by};
pub use types::{EventOutcome, S3Bucket, S3Entity, S3Object, UploadEvent, UploadRecord};
