// SPDX-License-Identifier: GPL-3.0-only

use super::validator::ValidatedUrl;
use crate::errors::{BackendError, ScanError};

/// How one scan attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Permission was not granted, or could not be checked
    NotPermitted(ScanError),
    /// A scan was already running; nothing was started
    AlreadyScanning,
    /// The user closed the scanner without a code
    Cancelled,
    /// The code did not contain a URL
    Rejected(ScanError),
    /// The URL was handed to the browser
    Opened(ValidatedUrl),
    /// The browser refused the URL
    OpenFailed { url: ValidatedUrl, reason: BackendError },
    /// The scanner itself failed
    ScannerFailed(BackendError),
}

impl ScanOutcome {
    pub fn opened_url(&self) -> Option<&ValidatedUrl> {
        match self {
            Self::Opened(url) => Some(url),
            _ => None,
        }
    }

    /// Whether the flow ended in an error rather than a user decision
    ///
    /// An undetermined permission counts: nobody declined, the scanner just
    /// could not be reached.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::OpenFailed { .. }
                | Self::ScannerFailed(_)
                | Self::NotPermitted(
                    ScanError::PlatformQueryFailure(_) | ScanError::PermissionUndetermined
                )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures() {
        assert!(ScanOutcome::NotPermitted(ScanError::PermissionUndetermined).is_failure());
        assert!(
            ScanOutcome::NotPermitted(ScanError::PlatformQueryFailure("gone".into())).is_failure()
        );
        assert!(ScanOutcome::ScannerFailed(BackendError::Scanner("decode".into())).is_failure());
    }

    #[test]
    fn test_user_decisions_are_not_failures() {
        assert!(!ScanOutcome::NotPermitted(ScanError::PermissionDenied).is_failure());
        assert!(!ScanOutcome::Cancelled.is_failure());
        assert!(!ScanOutcome::AlreadyScanning.is_failure());
        assert!(!ScanOutcome::Rejected(ScanError::InvalidPayload("woof".into())).is_failure());
    }
}
