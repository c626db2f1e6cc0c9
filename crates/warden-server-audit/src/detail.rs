// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Ordered `key=value` detail fields and their payload rendering.
//!
//! Field keys are a versioned contract with downstream audit consumers,
//! some of which parse payloads positionally. Renaming a key or changing
//! the order within a branch is a breaking change.

use serde::{Serialize, Serializer};
use std::fmt;

/// Stable detail keys.
pub mod keys {
	pub const USER_ID: &str = "user_id";
	pub const USERNAME: &str = "username";
	pub const USER_ORIGIN: &str = "user_origin";
	pub const CREATED_BY_USER_ID: &str = "created_by_user_id";
	pub const CREATED_BY_USERNAME: &str = "created_by_username";
	pub const CREATED_BY_CLIENT_ID: &str = "created_by_client_id";
}

/// One `key=value` entry of an audit payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DetailField {
	key: &'static str,
	value: String,
}

impl DetailField {
	pub fn new(key: &'static str, value: impl Into<String>) -> Self {
		Self {
			key,
			value: value.into(),
		}
	}

	pub fn key(&self) -> &'static str {
		self.key
	}

	pub fn value(&self) -> &str {
		&self.value
	}
}

impl fmt::Display for DetailField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}={}", self.key, self.value)
	}
}

// Serialized as the rendered `key=value` string.
impl Serialize for DetailField {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

/// Render an ordered detail sequence as a JSON array of `key=value` strings.
pub fn render_payload(fields: &[DetailField]) -> String {
	serde_json::Value::Array(
		fields
			.iter()
			.map(|field| serde_json::Value::String(field.to_string()))
			.collect(),
	)
	.to_string()
}
