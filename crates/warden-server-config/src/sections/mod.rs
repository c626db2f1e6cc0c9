// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod audit;

pub use audit::{AuditConfig, AuditConfigLayer, DEFAULT_ZONE_ID, SEVERITY_NAMES};
