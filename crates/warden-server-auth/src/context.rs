// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authentication state for request processing.
//!
//! The authentication pipeline decides *how* a caller authenticated; this
//! module only models *what* it ended up with. A principal is either a
//! human [`UserPrincipal`] or an opaque identifier (typically an OAuth
//! client id). The shape is decided once, when the context is built, so
//! downstream consumers never inspect principal types at runtime.

use serde::{Deserialize, Serialize};

/// A human principal authenticated through a login flow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserPrincipal {
	/// Stable user identifier.
	pub id: String,
	/// Name shown for the user (usually the username).
	pub name: String,
	/// Primary email, if the login flow exposed one.
	pub email: Option<String>,
	/// Identity provider the user authenticated with.
	pub origin: Option<String>,
}

impl UserPrincipal {
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			email: None,
			origin: None,
		}
	}

	pub fn with_email(mut self, email: impl Into<String>) -> Self {
		self.email = Some(email.into());
		self
	}

	pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
		self.origin = Some(origin.into());
		self
	}
}

/// The authenticated party behind a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Principal {
	/// A human user.
	User(UserPrincipal),
	/// Any other principal, identified only by its opaque value.
	Opaque(String),
}

impl Principal {
	/// The principal's name: the display name for users, the raw value otherwise.
	pub fn name(&self) -> &str {
		match self {
			Principal::User(user) => &user.name,
			Principal::Opaque(value) => value,
		}
	}

	pub fn is_user(&self) -> bool {
		matches!(self, Principal::User(_))
	}
}

impl From<UserPrincipal> for Principal {
	fn from(user: UserPrincipal) -> Self {
		Principal::User(user)
	}
}

/// Authentication context for request processing.
///
/// `is_authenticated` and `principal` are independent on purpose: some
/// flows carry a principal value before authentication has completed
/// (a federated login that is still provisioning the account), and
/// consumers must honour the flag rather than the presence of a principal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
	/// Whether the request is authenticated.
	pub is_authenticated: bool,
	/// The principal, if one has been established.
	pub principal: Option<Principal>,
}

impl AuthContext {
	/// Create a new unauthenticated context.
	pub fn unauthenticated() -> Self {
		Self {
			is_authenticated: false,
			principal: None,
		}
	}

	/// Create a new authenticated context for the given principal.
	pub fn authenticated(principal: Principal) -> Self {
		Self {
			is_authenticated: true,
			principal: Some(principal),
		}
	}

	/// Authenticated context for a human user.
	pub fn for_user(user: UserPrincipal) -> Self {
		Self::authenticated(Principal::User(user))
	}

	/// Authenticated context for a client identified by `client_id`.
	pub fn for_client(client_id: impl Into<String>) -> Self {
		Self::authenticated(Principal::Opaque(client_id.into()))
	}

	/// Get the principal, if present.
	pub fn principal(&self) -> Option<&Principal> {
		self.principal.as_ref()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unauthenticated_has_no_principal() {
		let ctx = AuthContext::unauthenticated();
		assert!(!ctx.is_authenticated);
		assert!(ctx.principal().is_none());
		assert_eq!(ctx, AuthContext::default());
	}

	#[test]
	fn for_user_sets_user_principal() {
		let ctx = AuthContext::for_user(UserPrincipal::new("u1", "alice").with_origin("ldap"));
		assert!(ctx.is_authenticated);
		let principal = ctx.principal().unwrap();
		assert!(principal.is_user());
		assert_eq!(principal.name(), "alice");
	}

	#[test]
	fn for_client_sets_opaque_principal() {
		let ctx = AuthContext::for_client("admin-cli");
		assert!(ctx.is_authenticated);
		assert_eq!(ctx.principal(), Some(&Principal::Opaque("admin-cli".to_string())));
		assert_eq!(ctx.principal().unwrap().name(), "admin-cli");
	}

	#[test]
	fn principal_serializes_tagged() {
		let principal = Principal::Opaque("c1".to_string());
		let json = serde_json::to_value(&principal).unwrap();
		assert_eq!(json, serde_json::json!({"type": "opaque", "value": "c1"}));

		let user: Principal = UserPrincipal::new("u1", "alice").with_email("a@example.com").into();
		let roundtrip: Principal =
			serde_json::from_str(&serde_json::to_string(&user).unwrap()).unwrap();
		assert_eq!(roundtrip, user);
	}
}
