// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authentication context and actor attribution for Warden.
//!
//! This crate provides:
//! - [`AuthContext`] - authentication state captured for the current request
//! - [`Principal`] - closed set of principal shapes (human user or opaque client)
//! - [`ActorContext`] - the resolved actor used for audit attribution
//! - [`resolve`] - classification of an [`AuthContext`] into an [`ActorContext`]

pub mod actor;
pub mod context;

pub use actor::{resolve, ActorContext, ActorKind};
pub use context::{AuthContext, Principal, UserPrincipal};
