// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Classifies repository locations as URLs.

use once_cell::sync::Lazy;
use regex::Regex;

/// Scheme-prefixed URL or SSH-style `git@host:` location, followed by at least one character.
static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?://|git@[\w\.-]+:).+").expect("URL pattern is valid"));

/// Check whether a repository location is URL-shaped.
///
/// Accepts `http://...`, `https://...` and `git@<host>:...` where `<host>` consists of
/// word characters, dots or hyphens. An absent value should be passed as `""`.
#[must_use]
pub fn is_url(candidate: &str) -> bool {
    URL_PATTERN.is_match(candidate)
}
