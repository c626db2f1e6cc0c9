// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Hand-off point between record construction and whatever stores or
//! forwards audit records.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info, warn};

use crate::error::DispatchError;
use crate::event::AuditSeverity;
use crate::record::AuditRecord;

/// Receives finalized audit records.
pub trait AuditDispatch: Send + Sync {
	fn name(&self) -> &str;

	fn dispatch(&self, record: AuditRecord) -> Result<(), DispatchError>;
}

/// Writes records to the `tracing` pipeline under the `warden::audit` target.
#[derive(Debug, Clone, Default)]
pub struct TracingAuditDispatch;

impl AuditDispatch for TracingAuditDispatch {
	fn name(&self) -> &str {
		"tracing"
	}

	fn dispatch(&self, record: AuditRecord) -> Result<(), DispatchError> {
		macro_rules! emit {
			($level:ident) => {
				$level!(
					target: "warden::audit",
					subject_id = %record.subject_id(),
					kind = %record.kind(),
					origin = %record.origin(),
					zone_id = %record.zone_id(),
					severity = %record.severity(),
					occurred_at = %record.occurred_at().to_rfc3339(),
					details = %record.detail_payload(),
					"audit event"
				)
			};
		}

		match record.severity() {
			AuditSeverity::Debug => emit!(debug),
			AuditSeverity::Info | AuditSeverity::Notice => emit!(info),
			AuditSeverity::Warning => emit!(warn),
			AuditSeverity::Error | AuditSeverity::Critical => emit!(error),
		}
		Ok(())
	}
}

/// Keeps every dispatched record in memory.
#[derive(Debug, Default)]
pub struct InMemoryAuditDispatch {
	records: Mutex<Vec<AuditRecord>>,
}

impl InMemoryAuditDispatch {
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot of the records received so far, oldest first.
	pub fn records(&self) -> Vec<AuditRecord> {
		self.lock().clone()
	}

	pub fn len(&self) -> usize {
		self.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.lock().is_empty()
	}

	/// Remove and return all stored records.
	pub fn drain(&self) -> Vec<AuditRecord> {
		std::mem::take(&mut *self.lock())
	}

	// A panic while holding the lock cannot leave the Vec half-written.
	fn lock(&self) -> MutexGuard<'_, Vec<AuditRecord>> {
		self.records.lock().unwrap_or_else(PoisonError::into_inner)
	}
}

impl AuditDispatch for InMemoryAuditDispatch {
	fn name(&self) -> &str {
		"in-memory"
	}

	fn dispatch(&self, record: AuditRecord) -> Result<(), DispatchError> {
		self.lock().push(record);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::event::ZoneId;
	use crate::user_event::{UserModifiedEvent, UserSnapshot};
	use std::io;
	use std::sync::Arc;
	use tracing_subscriber::fmt::MakeWriter;
	use warden_server_auth::ActorContext;

	fn record() -> AuditRecord {
		UserModifiedEvent::created(
			UserSnapshot::new("42", "bob", "uaa"),
			ActorContext::client("c1"),
			ZoneId::default(),
		)
		.to_audit_record()
	}

	#[test]
	fn in_memory_keeps_records_in_order() {
		let dispatch = InMemoryAuditDispatch::new();
		assert!(dispatch.is_empty());

		let first = record();
		let second = UserModifiedEvent::deleted(
			UserSnapshot::new("43", "carol", "ldap"),
			ActorContext::Unauthenticated,
			ZoneId::default(),
		)
		.to_audit_record();

		dispatch.dispatch(first.clone()).unwrap();
		dispatch.dispatch(second.clone()).unwrap();

		assert_eq!(dispatch.len(), 2);
		assert_eq!(dispatch.records(), vec![first, second]);
	}

	#[test]
	fn drain_empties_the_store() {
		let dispatch = InMemoryAuditDispatch::new();
		dispatch.dispatch(record()).unwrap();

		assert_eq!(dispatch.drain().len(), 1);
		assert!(dispatch.is_empty());
	}

	#[derive(Clone, Default)]
	struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

	impl io::Write for CaptureWriter {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
			self.0.lock().unwrap().extend_from_slice(buf);
			Ok(buf.len())
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	impl<'a> MakeWriter<'a> for CaptureWriter {
		type Writer = CaptureWriter;

		fn make_writer(&'a self) -> Self::Writer {
			self.clone()
		}
	}

	#[test]
	fn tracing_dispatch_logs_record_fields() {
		let writer = CaptureWriter::default();
		let subscriber = tracing_subscriber::fmt()
			.with_writer(writer.clone())
			.with_ansi(false)
			.with_max_level(tracing::Level::DEBUG)
			.finish();

		tracing::subscriber::with_default(subscriber, || {
			TracingAuditDispatch.dispatch(record()).unwrap();
		});

		let output = String::from_utf8(writer.0.lock().unwrap().clone()).unwrap();
		assert!(output.contains("warden::audit"));
		assert!(output.contains("kind=user_created"));
		assert!(output.contains("subject_id=42"));
		assert!(output.contains("created_by_client_id=c1"));
	}
}
