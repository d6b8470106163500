// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Repository access modes and validation of repository locations against them.

mod errors;
mod url;
mod validate;

pub use errors::{ValidationError, ValidationResult};
pub use url::is_url;
pub use validate::{validate_location, validate_repo};

use std::fmt;
use std::str::FromStr;

/// How the repository location is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoMode {
    /// A filesystem path that must exist.
    Local,
    /// A URL (`http(s)://` or `git@host:`).
    Remote,
}

impl RepoMode {
    /// All recognized modes, in sorted order.
    pub const ALL: [RepoMode; 2] = [RepoMode::Local, RepoMode::Remote];

    /// Get the textual name of the mode as given on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RepoMode::Local => "local",
            RepoMode::Remote => "remote",
        }
    }

    /// Render the recognized modes as a list, e.g. `['local', 'remote']`.
    #[must_use]
    pub fn allowed() -> String {
        let names: Vec<String> = Self::ALL
            .iter()
            .map(|mode| format!("'{}'", mode.as_str()))
            .collect();
        format!("[{}]", names.join(", "))
    }
}

impl FromStr for RepoMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownRepoMode {
                mode: s.to_string(),
            })
    }
}

impl fmt::Display for RepoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
