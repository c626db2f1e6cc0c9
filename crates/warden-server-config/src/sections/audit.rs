// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Audit logging configuration section.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Zone records are attributed to when no tenant is configured.
pub const DEFAULT_ZONE_ID: &str = "uaa";

/// Severity names accepted for `min_severity`, most to least severe.
pub const SEVERITY_NAMES: &[&str] = &["critical", "error", "warning", "notice", "info", "debug"];

const DEFAULT_MIN_SEVERITY: &str = "info";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuditConfigLayer {
	pub enabled: Option<bool>,
	pub min_severity: Option<String>,
	pub zone_id: Option<String>,
}

impl AuditConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.enabled.is_some() {
			self.enabled = other.enabled;
		}
		if other.min_severity.is_some() {
			self.min_severity = other.min_severity;
		}
		if other.zone_id.is_some() {
			self.zone_id = other.zone_id;
		}
	}

	pub fn finalize(self) -> AuditConfig {
		AuditConfig {
			enabled: self.enabled.unwrap_or(true),
			min_severity: self
				.min_severity
				.map(|s| s.trim().to_lowercase())
				.unwrap_or_else(|| DEFAULT_MIN_SEVERITY.to_string()),
			default_zone_id: self
				.zone_id
				.map(|z| z.trim().to_string())
				.unwrap_or_else(|| DEFAULT_ZONE_ID.to_string()),
		}
	}
}

/// Audit configuration (runtime, fully resolved).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditConfig {
	pub enabled: bool,
	pub min_severity: String,
	pub default_zone_id: String,
}

impl Default for AuditConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			min_severity: DEFAULT_MIN_SEVERITY.to_string(),
			default_zone_id: DEFAULT_ZONE_ID.to_string(),
		}
	}
}

impl AuditConfig {
	pub fn validate(&self) -> Result<(), ConfigError> {
		if !SEVERITY_NAMES.contains(&self.min_severity.as_str()) {
			return Err(ConfigError::invalid_value(
				"audit.min_severity",
				format!(
					"unknown severity '{}', expected one of {}",
					self.min_severity,
					SEVERITY_NAMES.join(", ")
				),
			));
		}

		if self.default_zone_id.is_empty() {
			return Err(ConfigError::validation("audit.zone_id must not be empty"));
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_defaults() {
		let config = AuditConfigLayer::default().finalize();
		assert!(config.enabled);
		assert_eq!(config.min_severity, "info");
		assert_eq!(config.default_zone_id, "uaa");
		assert_eq!(config, AuditConfig::default());
		assert!(config.validate().is_ok());
	}

	#[test]
	fn test_finalize_normalizes_values() {
		let config = AuditConfigLayer {
			enabled: Some(false),
			min_severity: Some(" Notice ".to_string()),
			zone_id: Some(" acme ".to_string()),
		}
		.finalize();
		assert!(!config.enabled);
		assert_eq!(config.min_severity, "notice");
		assert_eq!(config.default_zone_id, "acme");
	}

	#[test]
	fn test_unknown_severity_rejected() {
		let config = AuditConfig {
			min_severity: "loud".to_string(),
			..Default::default()
		};
		let err = config.validate().unwrap_err();
		assert!(err.to_string().contains("audit.min_severity"));
	}

	#[test]
	fn test_empty_zone_rejected() {
		let config = AuditConfigLayer {
			zone_id: Some("   ".to_string()),
			..Default::default()
		}
		.finalize();
		assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
	}

	#[test]
	fn test_layer_from_toml() {
		let layer: AuditConfigLayer = toml::from_str(
			r#"
			enabled = false
			min_severity = "warning"
			"#,
		)
		.unwrap();
		assert_eq!(layer.enabled, Some(false));
		assert_eq!(layer.min_severity.as_deref(), Some("warning"));
		assert!(layer.zone_id.is_none());
	}

	fn arb_layer() -> impl Strategy<Value = AuditConfigLayer> {
		(
			proptest::option::of(any::<bool>()),
			proptest::option::of(proptest::sample::select(SEVERITY_NAMES)),
			proptest::option::of("[a-z]{1,8}"),
		)
			.prop_map(|(enabled, severity, zone_id)| AuditConfigLayer {
				enabled,
				min_severity: severity.map(str::to_string),
				zone_id,
			})
	}

	proptest! {
		#[test]
		fn merge_overlay_wins_when_present(base in arb_layer(), overlay in arb_layer()) {
			let mut merged = base.clone();
			merged.merge(overlay.clone());
			prop_assert_eq!(merged.enabled, overlay.enabled.or(base.enabled));
			prop_assert_eq!(merged.min_severity, overlay.min_severity.or(base.min_severity));
			prop_assert_eq!(merged.zone_id, overlay.zone_id.or(base.zone_id));
		}

		#[test]
		fn finalized_known_values_validate(layer in arb_layer()) {
			prop_assert!(layer.finalize().validate().is_ok());
		}
	}
}
