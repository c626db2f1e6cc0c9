// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::Deserialize;

use crate::sections::AuditConfigLayer;

/// Partial server configuration produced by a single source.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub audit: Option<AuditConfigLayer>,
}

impl ServerConfigLayer {
	/// Overlay `other` on top of `self`; values present in `other` win.
	pub fn merge(&mut self, other: ServerConfigLayer) {
		if let Some(incoming) = other.audit {
			match self.audit {
				Some(ref mut existing) => existing.merge(incoming),
				None => self.audit = Some(incoming),
			}
		}
	}
}
