// SPDX-License-Identifier: GPL-3.0-only

//! Decoded payload validation
//!
//! A loose heuristic, not a URL parser: anything with a dot followed by a
//! short lowercase TLD-like token counts. Scheme, host structure, and
//! percent-encoding are never checked, so email addresses pass too.

use crate::errors::ScanError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Non-whitespace run, a dot, then 2-5 lowercase letters, anywhere in the text
static URL_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+\.[a-z]{2,5}").expect("URL heuristic pattern is valid")
});

/// Whether `text` contains a URL-like token
pub fn is_url_like(text: &str) -> bool {
    URL_LIKE.is_match(text)
}

/// Decoded text that passed [`is_url_like`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(String);

impl ValidatedUrl {
    /// Validate raw scanner content, keeping it verbatim
    pub fn parse(content: &str) -> Result<Self, ScanError> {
        if is_url_like(content) {
            Ok(Self(content.to_string()))
        } else {
            Err(ScanError::InvalidPayload(content.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
