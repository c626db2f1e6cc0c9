// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::{AuditSeverity, EventKind, ZoneId};

/// A finalized audit record, ready to hand to a dispatch target.
///
/// Fields are private; a record is never modified after it is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
	subject_id: String,
	kind: EventKind,
	origin: String,
	detail_payload: String,
	zone_id: ZoneId,
	severity: AuditSeverity,
	occurred_at: DateTime<Utc>,
}

impl AuditRecord {
	pub(crate) fn new(
		subject_id: String,
		kind: EventKind,
		origin: String,
		detail_payload: String,
		zone_id: ZoneId,
		occurred_at: DateTime<Utc>,
	) -> Self {
		Self {
			subject_id,
			kind,
			origin,
			detail_payload,
			severity: kind.default_severity(),
			zone_id,
			occurred_at,
		}
	}

	/// Id of the user the event is about.
	pub fn subject_id(&self) -> &str {
		&self.subject_id
	}

	pub fn kind(&self) -> EventKind {
		self.kind
	}

	/// Attribution string describing who caused the event.
	pub fn origin(&self) -> &str {
		&self.origin
	}

	/// JSON array of `key=value` detail strings.
	pub fn detail_payload(&self) -> &str {
		&self.detail_payload
	}

	pub fn zone_id(&self) -> &ZoneId {
		&self.zone_id
	}

	pub fn severity(&self) -> AuditSeverity {
		self.severity
	}

	pub fn occurred_at(&self) -> DateTime<Utc> {
		self.occurred_at
	}

	/// Decode the payload back into its ordered `key=value` strings.
	pub fn details(&self) -> Result<Vec<String>, serde_json::Error> {
		serde_json::from_str(&self.detail_payload)
	}
}
