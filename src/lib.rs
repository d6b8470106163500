// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Parameter validation for the dependency graph visualizer.
//!
//! This crate provides functionality to:
//! - Classify repository locations as URLs or filesystem paths
//! - Validate a repository location against its declared access mode
//! - Build and render the validated invocation parameters

pub mod params;
pub mod repo;

// Re-export key types for convenience
pub use params::InvocationParameters;
pub use repo::{
    is_url, validate_location, validate_repo, RepoMode, ValidationError, ValidationResult,
};
