// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core event types for user lifecycle auditing.
//!
//! - [`EventKind`]: the closed set of auditable user lifecycle events
//! - [`AuditSeverity`]: RFC 5424-compatible severity levels
//! - [`ZoneId`]: the tenant a record belongs to

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use warden_server_config::DEFAULT_ZONE_ID;

/// Lifecycle events recorded for user accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
	#[serde(rename = "user_created")]
	Created,
	#[serde(rename = "user_modified")]
	Modified,
	#[serde(rename = "user_deleted")]
	Deleted,
	#[serde(rename = "user_verified")]
	Verified,
	#[serde(rename = "email_changed")]
	EmailChanged,
}

impl EventKind {
	/// Returns every event kind, in declaration order.
	pub fn all() -> &'static [EventKind] {
		&[
			EventKind::Created,
			EventKind::Modified,
			EventKind::Deleted,
			EventKind::Verified,
			EventKind::EmailChanged,
		]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			EventKind::Created => "user_created",
			EventKind::Modified => "user_modified",
			EventKind::Deleted => "user_deleted",
			EventKind::Verified => "user_verified",
			EventKind::EmailChanged => "email_changed",
		}
	}

	/// Returns the default severity for this event kind.
	///
	/// Deletion is an administrative, destructive action and maps to
	/// `Notice`; everything else is a normal operation at `Info`.
	pub fn default_severity(&self) -> AuditSeverity {
		match self {
			EventKind::Created
			| EventKind::Modified
			| EventKind::Verified
			| EventKind::EmailChanged => AuditSeverity::Info,
			EventKind::Deleted => AuditSeverity::Notice,
		}
	}
}

impl fmt::Display for EventKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Severity levels for audit events, compatible with RFC 5424 syslog.
///
/// The numeric values correspond to syslog severity codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuditSeverity {
	Debug = 7,
	#[default]
	Info = 6,
	Notice = 5,
	Warning = 4,
	Error = 3,
	Critical = 2,
}

impl AuditSeverity {
	/// Returns the RFC 5424 numeric severity code.
	pub fn as_syslog_code(&self) -> u8 {
		*self as u8
	}

	/// Returns all severity levels from most to least severe.
	pub fn all() -> &'static [AuditSeverity] {
		&[
			AuditSeverity::Critical,
			AuditSeverity::Error,
			AuditSeverity::Warning,
			AuditSeverity::Notice,
			AuditSeverity::Info,
			AuditSeverity::Debug,
		]
	}
}

impl PartialOrd for AuditSeverity {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for AuditSeverity {
	fn cmp(&self, other: &Self) -> Ordering {
		// Lower numeric value = higher severity (Critical=2 > Debug=7)
		(*other as u8).cmp(&(*self as u8))
	}
}

impl fmt::Display for AuditSeverity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			AuditSeverity::Debug => "debug",
			AuditSeverity::Info => "info",
			AuditSeverity::Notice => "notice",
			AuditSeverity::Warning => "warning",
			AuditSeverity::Error => "error",
			AuditSeverity::Critical => "critical",
		};
		write!(f, "{s}")
	}
}

/// Error returned when parsing an unknown severity name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown audit severity '{0}'")]
pub struct UnknownSeverity(pub String);

impl FromStr for AuditSeverity {
	type Err = UnknownSeverity;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"debug" => Ok(AuditSeverity::Debug),
			"info" => Ok(AuditSeverity::Info),
			"notice" => Ok(AuditSeverity::Notice),
			"warning" | "warn" => Ok(AuditSeverity::Warning),
			"error" => Ok(AuditSeverity::Error),
			"critical" => Ok(AuditSeverity::Critical),
			_ => Err(UnknownSeverity(s.to_string())),
		}
	}
}

/// Identifier of the zone (tenant) a user belongs to.
///
/// Carried into records unchanged; never consulted when assembling details.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(String);

impl ZoneId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_inner(self) -> String {
		self.0
	}
}

impl Default for ZoneId {
	fn default() -> Self {
		Self(DEFAULT_ZONE_ID.to_string())
	}
}

impl fmt::Display for ZoneId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for ZoneId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

impl From<String> for ZoneId {
	fn from(id: String) -> Self {
		Self(id)
	}
}
