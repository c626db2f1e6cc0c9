// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

pub mod detail;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod publisher;
pub mod record;
pub mod user_event;

pub use detail::{render_payload, DetailField};
pub use dispatch::{AuditDispatch, InMemoryAuditDispatch, TracingAuditDispatch};
pub use error::DispatchError;
pub use event::{AuditSeverity, EventKind, UnknownSeverity, ZoneId};
pub use publisher::{PublishOutcome, SkipReason, UserAuditPublisher};
pub use record::AuditRecord;
pub use user_event::{build_details, UserModifiedEvent, UserSnapshot};

pub use warden_server_auth::{resolve, ActorContext, ActorKind, AuthContext};
pub use warden_server_config::AuditConfig;
