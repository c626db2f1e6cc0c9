// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Actor resolution for audit attribution.
//!
//! [`resolve`] turns an [`AuthContext`] into exactly one [`ActorContext`]:
//!
//! ```text
//! AuthContext ──► is_authenticated? ──no──► Unauthenticated
//!                        │
//!                       yes
//!                        ├── Principal::User   ──► AuthenticatedUser { id, display_name }
//!                        └── Principal::Opaque ──► AuthenticatedClient { client_id }
//! ```
//!
//! Resolution never fails. An authenticated context without any principal
//! degrades to a client with an empty identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use crate::context::{AuthContext, Principal};

/// Who performed an audited action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActorContext {
	/// No authenticated principal, e.g. a federated login creating a shadow account.
	Unauthenticated,
	/// A human principal.
	AuthenticatedUser { id: String, display_name: String },
	/// A non-human caller known only by its identifier.
	AuthenticatedClient { client_id: String },
}

/// Discriminant of an [`ActorContext`], for logging and metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
	Unauthenticated,
	User,
	Client,
}

impl fmt::Display for ActorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ActorKind::Unauthenticated => write!(f, "unauthenticated"),
			ActorKind::User => write!(f, "user"),
			ActorKind::Client => write!(f, "client"),
		}
	}
}

impl ActorContext {
	pub fn user(id: impl Into<String>, display_name: impl Into<String>) -> Self {
		ActorContext::AuthenticatedUser {
			id: id.into(),
			display_name: display_name.into(),
		}
	}

	pub fn client(client_id: impl Into<String>) -> Self {
		ActorContext::AuthenticatedClient {
			client_id: client_id.into(),
		}
	}

	pub fn kind(&self) -> ActorKind {
		match self {
			ActorContext::Unauthenticated => ActorKind::Unauthenticated,
			ActorContext::AuthenticatedUser { .. } => ActorKind::User,
			ActorContext::AuthenticatedClient { .. } => ActorKind::Client,
		}
	}

	pub fn is_authenticated(&self) -> bool {
		!matches!(self, ActorContext::Unauthenticated)
	}

	/// The user id or client id of the actor, if authenticated.
	pub fn actor_id(&self) -> Option<&str> {
		match self {
			ActorContext::Unauthenticated => None,
			ActorContext::AuthenticatedUser { id, .. } => Some(id),
			ActorContext::AuthenticatedClient { client_id } => Some(client_id),
		}
	}

	/// Log-friendly origin tag identifying the caller.
	///
	/// The text is for humans reading audit trails; consumers that need
	/// to branch on the actor should use [`ActorContext::kind`].
	pub fn attribution(&self) -> String {
		match self {
			ActorContext::Unauthenticated => "caller=unauthenticated".to_string(),
			ActorContext::AuthenticatedUser { id, display_name } => {
				format!("caller={display_name}, user_id={id}")
			}
			ActorContext::AuthenticatedClient { client_id } => {
				format!("caller={client_id}, client_id={client_id}")
			}
		}
	}
}

impl fmt::Display for ActorContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.attribution())
	}
}

/// Classify an authentication context into the actor that owns it.
pub fn resolve(ctx: &AuthContext) -> ActorContext {
	if !ctx.is_authenticated {
		trace!("resolved unauthenticated actor");
		return ActorContext::Unauthenticated;
	}

	let actor = match ctx.principal() {
		Some(Principal::User(user)) => ActorContext::user(&user.id, &user.name),
		Some(Principal::Opaque(value)) => ActorContext::client(value),
		None => ActorContext::client(String::new()),
	};
	trace!(actor_kind = %actor.kind(), "resolved authenticated actor");
	actor
}

impl From<&AuthContext> for ActorContext {
	fn from(ctx: &AuthContext) -> Self {
		resolve(ctx)
	}
}
