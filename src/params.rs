// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Validated parameters of a single visualizer invocation.

use std::fmt;

use crate::repo::{validate_location, RepoMode, ValidationResult};

/// Parameters of one invocation. Only constructed after validation succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationParameters {
    package: String,
    repo: String,
    repo_mode: RepoMode,
    output: String,
    filter: String,
}

impl InvocationParameters {
    /// Validate raw parameters and build the invocation record.
    ///
    /// `output` and `filter` are accepted as given; only the repository is checked.
    ///
    /// # Errors
    /// Returns an error if the repository mode is unknown or the repository location does
    /// not match it.
    pub fn new(
        package: String,
        repo: String,
        repo_mode: &str,
        output: String,
        filter: String,
    ) -> ValidationResult<Self> {
        let repo_mode: RepoMode = repo_mode.parse()?;
        validate_location(&repo, repo_mode)?;
        Ok(Self {
            package,
            repo,
            repo_mode,
            output,
            filter,
        })
    }

    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    #[must_use]
    pub fn repo_mode(&self) -> RepoMode {
        self.repo_mode
    }

    /// Output image filename.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Package name filter, empty if not given.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }
}

/// Renders one `name=value` line per parameter.
impl fmt::Display for InvocationParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "package={}", self.package)?;
        writeln!(f, "repo={}", self.repo)?;
        writeln!(f, "repo_mode={}", self.repo_mode)?;
        writeln!(f, "output={}", self.output)?;
        writeln!(f, "filter={}", self.filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::ValidationError;
    use tempfile::TempDir;

    fn remote_parameters(filter: &str) -> ValidationResult<InvocationParameters> {
        InvocationParameters::new(
            "foo".to_string(),
            "https://example.com/x.git".to_string(),
            "remote",
            "g.png".to_string(),
            filter.to_string(),
        )
    }

    #[test]
    fn test_remote_parameters() {
        let params = remote_parameters("").unwrap();
        assert_eq!(params.package(), "foo");
        assert_eq!(params.repo(), "https://example.com/x.git");
        assert_eq!(params.repo_mode(), RepoMode::Remote);
        assert_eq!(params.output(), "g.png");
        assert_eq!(params.filter(), "");
    }

    #[test]
    fn test_local_parameters() {
        let dir = TempDir::new().unwrap();
        let repo = dir.path().to_str().unwrap().to_string();
        let params = InvocationParameters::new(
            "bar".to_string(),
            repo.clone(),
            "local",
            "out.svg".to_string(),
            "lib".to_string(),
        )
        .unwrap();
        assert_eq!(params.repo(), repo);
        assert_eq!(params.repo_mode(), RepoMode::Local);
        assert_eq!(params.filter(), "lib");
    }

    #[test]
    fn test_validation_error_is_propagated() {
        let result = InvocationParameters::new(
            "foo".to_string(),
            "https://example.com/x.git".to_string(),
            "bogus",
            "g.png".to_string(),
            String::new(),
        );
        assert_eq!(
            result,
            Err(ValidationError::UnknownRepoMode {
                mode: "bogus".to_string()
            })
        );
    }

    #[test]
    fn test_display_order() {
        let params = remote_parameters("").unwrap();
        assert_eq!(
            params.to_string(),
            "package=foo\n\
             repo=https://example.com/x.git\n\
             repo_mode=remote\n\
             output=g.png\n\
             filter=\n"
        );
    }

    #[test]
    fn test_display_echoes_values_verbatim() {
        let params = remote_parameters("a=b c").unwrap();
        assert!(params.to_string().ends_with("filter=a=b c\n"));
    }
}
