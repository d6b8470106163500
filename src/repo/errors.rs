// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Defines the error type for repository parameter validation.

use thiserror::Error;

use super::RepoMode;

/// Result type for validation operations.
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Inconsistent command-line parameters. Variants only differ in their message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("repo_mode: must be one of {}", RepoMode::allowed())]
    UnknownRepoMode { mode: String },
    #[error("repo: expected URL (http(s):// or git@...) for repo_mode=remote")]
    ExpectedUrl { repo: String },
    #[error("repo: got URL but repo_mode=local expects filesystem path")]
    ExpectedPath { repo: String },
    #[error("repo: path does not exist: {repo}")]
    PathNotFound { repo: String },
}
