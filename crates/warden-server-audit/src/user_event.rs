// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User lifecycle audit events.
//!
//! A [`UserModifiedEvent`] pairs a [`UserSnapshot`] with the actor that
//! caused the change. The actor is resolved before construction and passed
//! in explicitly, so an event's attribution is fixed at the moment it is
//! built.
//!
//! # Detail matrix
//!
//! | kind                         | actor           | details                                         |
//! |------------------------------|-----------------|-------------------------------------------------|
//! | `Created`                    | unauthenticated | `user_id`, `username`, `user_origin`            |
//! | `Created`                    | user            | ... + `created_by_user_id`, `created_by_username` |
//! | `Created`                    | client          | ... + `created_by_client_id`                    |
//! | any other                    | any             | `user_id`, `username`                           |
//!
//! Only creation carries actor attribution in the details. The other kinds
//! still record the actor in [`AuditRecord::origin`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use warden_server_auth::ActorContext;

use crate::detail::{keys, render_payload, DetailField};
use crate::event::{EventKind, ZoneId};
use crate::record::AuditRecord;

/// Read-only view of a user account at the time of the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSnapshot {
	pub id: String,
	pub user_name: String,
	pub primary_email: Option<String>,
	/// Identity source the account belongs to (e.g. `uaa`, `ldap`, a SAML provider alias).
	pub origin: String,
}

impl UserSnapshot {
	pub fn new(
		id: impl Into<String>,
		user_name: impl Into<String>,
		origin: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			user_name: user_name.into(),
			primary_email: None,
			origin: origin.into(),
		}
	}

	pub fn with_email(mut self, email: impl Into<String>) -> Self {
		self.primary_email = Some(email.into());
		self
	}
}

/// An audit event for a change to a user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserModifiedEvent {
	snapshot: UserSnapshot,
	kind: EventKind,
	actor: ActorContext,
	zone_id: ZoneId,
	occurred_at: DateTime<Utc>,
}

impl UserModifiedEvent {
	fn new(kind: EventKind, snapshot: UserSnapshot, actor: ActorContext, zone_id: ZoneId) -> Self {
		Self {
			snapshot,
			kind,
			actor,
			zone_id,
			occurred_at: Utc::now(),
		}
	}

	pub fn created(snapshot: UserSnapshot, actor: ActorContext, zone_id: ZoneId) -> Self {
		Self::new(EventKind::Created, snapshot, actor, zone_id)
	}

	pub fn modified(snapshot: UserSnapshot, actor: ActorContext, zone_id: ZoneId) -> Self {
		Self::new(EventKind::Modified, snapshot, actor, zone_id)
	}

	pub fn deleted(snapshot: UserSnapshot, actor: ActorContext, zone_id: ZoneId) -> Self {
		Self::new(EventKind::Deleted, snapshot, actor, zone_id)
	}

	pub fn verified(snapshot: UserSnapshot, actor: ActorContext, zone_id: ZoneId) -> Self {
		Self::new(EventKind::Verified, snapshot, actor, zone_id)
	}

	pub fn email_changed(snapshot: UserSnapshot, actor: ActorContext, zone_id: ZoneId) -> Self {
		Self::new(EventKind::EmailChanged, snapshot, actor, zone_id)
	}

	/// Build an event of the given kind.
	pub fn of_kind(
		kind: EventKind,
		snapshot: UserSnapshot,
		actor: ActorContext,
		zone_id: ZoneId,
	) -> Self {
		Self::new(kind, snapshot, actor, zone_id)
	}

	/// Override the event time. Intended for replays and tests.
	pub fn at(mut self, occurred_at: DateTime<Utc>) -> Self {
		self.occurred_at = occurred_at;
		self
	}

	pub fn kind(&self) -> EventKind {
		self.kind
	}

	pub fn actor(&self) -> &ActorContext {
		&self.actor
	}

	pub fn zone_id(&self) -> &ZoneId {
		&self.zone_id
	}

	pub fn snapshot(&self) -> &UserSnapshot {
		&self.snapshot
	}

	pub fn occurred_at(&self) -> DateTime<Utc> {
		self.occurred_at
	}

	pub fn user_id(&self) -> &str {
		&self.snapshot.id
	}

	pub fn username(&self) -> &str {
		&self.snapshot.user_name
	}

	pub fn email(&self) -> Option<&str> {
		self.snapshot.primary_email.as_deref()
	}

	/// Ordered detail fields for this event.
	pub fn details(&self) -> Vec<DetailField> {
		build_details(self.kind, &self.snapshot, &self.actor)
	}

	/// Finalize the event into an immutable audit record.
	pub fn to_audit_record(&self) -> AuditRecord {
		let payload = render_payload(&self.details());

		debug!(
			kind = %self.kind,
			zone_id = %self.zone_id,
			actor_kind = %self.actor.kind(),
			"built user audit record"
		);

		AuditRecord::new(
			self.snapshot.id.clone(),
			self.kind,
			self.actor.attribution(),
			payload,
			self.zone_id.clone(),
			self.occurred_at,
		)
	}
}

impl From<&UserModifiedEvent> for AuditRecord {
	fn from(event: &UserModifiedEvent) -> Self {
		event.to_audit_record()
	}
}

/// Assemble the ordered detail fields for a `kind` performed by `actor`.
pub fn build_details(
	kind: EventKind,
	snapshot: &UserSnapshot,
	actor: &ActorContext,
) -> Vec<DetailField> {
	let mut details = vec![
		DetailField::new(keys::USER_ID, &snapshot.id),
		DetailField::new(keys::USERNAME, &snapshot.user_name),
	];

	if kind != EventKind::Created {
		return details;
	}

	details.push(DetailField::new(keys::USER_ORIGIN, &snapshot.origin));
	match actor {
		ActorContext::Unauthenticated => {}
		ActorContext::AuthenticatedUser { id, display_name } => {
			details.push(DetailField::new(keys::CREATED_BY_USER_ID, id));
			details.push(DetailField::new(keys::CREATED_BY_USERNAME, display_name));
		}
		ActorContext::AuthenticatedClient { client_id } => {
			details.push(DetailField::new(keys::CREATED_BY_CLIENT_ID, client_id));
		}
	}
	details
}
