// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Failure reported by an audit dispatch target.
///
/// Building records never fails; only handing them off can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
	#[error("transient error: {0}")]
	Transient(String),

	#[error("permanent error: {0}")]
	Permanent(String),
}

impl DispatchError {
	pub fn is_transient(&self) -> bool {
		matches!(self, DispatchError::Transient(_))
	}
}
