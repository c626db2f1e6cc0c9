// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use tracing::{debug, instrument, warn};
use warden_server_auth::{resolve, AuthContext};
use warden_server_config::AuditConfig;

use crate::dispatch::AuditDispatch;
use crate::event::{AuditSeverity, EventKind, ZoneId};
use crate::user_event::{UserModifiedEvent, UserSnapshot};

/// Why a record was not handed to any dispatch target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
	Disabled,
	BelowMinSeverity,
}

/// Result of publishing one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
	Skipped(SkipReason),
	Dispatched { delivered: usize, failed: usize },
}

impl PublishOutcome {
	/// True if at least one target accepted the record.
	pub fn is_delivered(&self) -> bool {
		matches!(self, PublishOutcome::Dispatched { delivered, .. } if *delivered > 0)
	}
}

/// Turns user lifecycle events into audit records and fans them out.
pub struct UserAuditPublisher {
	enabled: bool,
	min_severity: AuditSeverity,
	zone_id: ZoneId,
	targets: Vec<Arc<dyn AuditDispatch>>,
}

impl UserAuditPublisher {
	pub fn new(config: &AuditConfig, targets: Vec<Arc<dyn AuditDispatch>>) -> Self {
		let min_severity = config
			.min_severity
			.parse::<AuditSeverity>()
			.unwrap_or_else(|e| {
				warn!(error = %e, "falling back to info for audit min_severity");
				AuditSeverity::Info
			});

		Self {
			enabled: config.enabled,
			min_severity,
			zone_id: ZoneId::new(config.default_zone_id.clone()),
			targets,
		}
	}

	/// Use `zone_id` instead of the configured default zone.
	pub fn with_zone(mut self, zone_id: impl Into<ZoneId>) -> Self {
		self.zone_id = zone_id.into();
		self
	}

	pub fn zone_id(&self) -> &ZoneId {
		&self.zone_id
	}

	/// Resolve the actor from `auth`, build the event, and publish it.
	///
	/// The actor is captured here, before the record is built; later changes
	/// to `auth` have no effect on the published record.
	pub fn raise(
		&self,
		kind: EventKind,
		snapshot: UserSnapshot,
		auth: &AuthContext,
	) -> PublishOutcome {
		let event = UserModifiedEvent::of_kind(kind, snapshot, resolve(auth), self.zone_id.clone());
		self.publish(&event)
	}

	#[instrument(skip(self, event), fields(kind = %event.kind(), zone_id = %event.zone_id()))]
	pub fn publish(&self, event: &UserModifiedEvent) -> PublishOutcome {
		if !self.enabled {
			debug!("audit disabled, skipping user event");
			return PublishOutcome::Skipped(SkipReason::Disabled);
		}

		let record = event.to_audit_record();
		if record.severity() < self.min_severity {
			debug!(severity = %record.severity(), "user event below min severity");
			return PublishOutcome::Skipped(SkipReason::BelowMinSeverity);
		}

		let mut delivered = 0;
		let mut failed = 0;
		for target in &self.targets {
			match target.dispatch(record.clone()) {
				Ok(()) => delivered += 1,
				Err(e) => {
					failed += 1;
					warn!(
						dispatch = target.name(),
						transient = e.is_transient(),
						error = %e,
						"audit dispatch failed"
					);
				}
			}
		}

		PublishOutcome::Dispatched { delivered, failed }
	}
}
