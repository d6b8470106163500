// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Validates that a repository location matches the declared repository mode.

use std::path::Path;

use super::errors::{ValidationError, ValidationResult};
use super::url::is_url;
use super::RepoMode;

/// Validate a repository location against a repository mode given as text.
///
/// The mode is checked first, so an unknown mode is reported even if the location is
/// invalid as well.
///
/// # Errors
/// Returns an error if the mode is unknown or the location does not match it, see
/// [`validate_location`].
pub fn validate_repo(repo: &str, mode: &str) -> ValidationResult<()> {
    validate_location(repo, mode.parse()?)
}

/// Validate a repository location against an already recognized mode.
///
/// In local mode the URL shape is checked before existence, and the location must exist
/// on the filesystem (file or directory, symlinks followed).
///
/// # Errors
/// Returns an error if a remote location is not URL-shaped, if a local location is
/// URL-shaped, or if a local location does not exist.
pub fn validate_location(repo: &str, mode: RepoMode) -> ValidationResult<()> {
    match mode {
        RepoMode::Remote => {
            if !is_url(repo) {
                return Err(ValidationError::ExpectedUrl {
                    repo: repo.to_string(),
                });
            }
        }
        RepoMode::Local => {
            if is_url(repo) {
                return Err(ValidationError::ExpectedPath {
                    repo: repo.to_string(),
                });
            }
            if !Path::new(repo).exists() {
                return Err(ValidationError::PathNotFound {
                    repo: repo.to_string(),
                });
            }
        }
    }
    Ok(())
}
