// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for Warden server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`WARDEN_SERVER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use warden_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("audit zone: {}", config.audit.default_zone_id);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{
	ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource, SYSTEM_CONFIG_PATH,
};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerConfig {
	pub audit: AuditConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`WARDEN_SERVER_*`)
/// 2. Config file (`/etc/warden/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![Box::new(EnvSource)])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge the given sources in precedence order and finalize the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let audit = layer.audit.unwrap_or_default().finalize();

	audit.validate()?;

	info!(
		audit_enabled = audit.enabled,
		min_severity = %audit.min_severity,
		zone_id = %audit.default_zone_id,
		"Server configuration loaded"
	);

	Ok(ServerConfig { audit })
}

#[cfg(test)]
mod tests {
	use super::*;

	struct FixedSource {
		name: &'static str,
		precedence: Precedence,
		layer: ServerConfigLayer,
	}

	impl ConfigSource for FixedSource {
		fn name(&self) -> &'static str {
			self.name
		}

		fn precedence(&self) -> Precedence {
			self.precedence
		}

		fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
			Ok(self.layer.clone())
		}
	}

	fn audit_layer(enabled: Option<bool>, min_severity: Option<&str>) -> ServerConfigLayer {
		ServerConfigLayer {
			audit: Some(AuditConfigLayer {
				enabled,
				min_severity: min_severity.map(str::to_string),
				zone_id: None,
			}),
		}
	}

	#[test]
	fn test_higher_precedence_wins_regardless_of_order() {
		let config = load_from_sources(vec![
			Box::new(FixedSource {
				name: "env",
				precedence: Precedence::Environment,
				layer: audit_layer(Some(false), None),
			}),
			Box::new(FixedSource {
				name: "file",
				precedence: Precedence::ConfigFile,
				layer: audit_layer(Some(true), Some("notice")),
			}),
			Box::new(DefaultsSource),
		])
		.unwrap();

		assert!(!config.audit.enabled);
		assert_eq!(config.audit.min_severity, "notice");
		assert_eq!(config.audit.default_zone_id, DEFAULT_ZONE_ID);
	}

	#[test]
	fn test_invalid_severity_fails_loading() {
		let result = load_from_sources(vec![Box::new(FixedSource {
			name: "file",
			precedence: Precedence::ConfigFile,
			layer: audit_layer(None, Some("verbose")),
		})]);
		assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
	}

	#[test]
	fn test_no_sources_yields_defaults() {
		let config = load_from_sources(Vec::new()).unwrap();
		assert_eq!(config, ServerConfig::default());
	}
}
