// SPDX-License-Identifier: GPL-3.0-only

//! System browser hand-off

use super::BrowserOpener;
use crate::errors::{BackendError, BackendResult};
use std::borrow::Cow;
use tracing::{error, info};

/// Opens URLs with the desktop's default handler
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl SystemBrowser {
    pub fn new() -> Self {
        Self
    }
}

impl BrowserOpener for SystemBrowser {
    async fn open(&self, url: &str) -> BackendResult<()> {
        let target = launch_target(url);
        info!(url = %target, "Opening URL");

        open::that_detached(target.as_ref()).map_err(|e| {
            error!(url = %target, error = %e, "Failed to open URL");
            BackendError::Browser(e.to_string())
        })
    }
}

/// What to hand to the OS for a URL-like string
///
/// Bare hosts like `example.com/page` would be treated as file paths by the
/// desktop handler, so they get an https scheme.
pub fn launch_target(url: &str) -> Cow<'_, str> {
    let trimmed = url.trim();
    let has_scheme = trimmed
        .split_once(':')
        .is_some_and(|(scheme, rest)| {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
                && (rest.starts_with("//") || matches!(scheme, "mailto" | "tel" | "sms" | "geo"))
        });

    if has_scheme {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(format!("https://{}", trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_target_keeps_scheme() {
        assert_eq!(
            launch_target("https://dog.example/treat"),
            "https://dog.example/treat"
        );
        assert_eq!(launch_target("mailto:rex@dog.example"), "mailto:rex@dog.example");
    }

    #[test]
    fn test_launch_target_adds_https_to_bare_host() {
        assert_eq!(launch_target("example.com/page"), "https://example.com/page");
        // host:port is not a scheme
        assert_eq!(launch_target("example.com:8080"), "https://example.com:8080");
    }
}
