// SPDX-License-Identifier: GPL-3.0-only

//! Camera permission negotiation
//!
//! One pass per view entry. At most one re-query happens (when the platform
//! prompt was shown during the first query); there is no retry loop, the user
//! re-enters the screen to try again.

use super::ui::UiService;
use crate::backends::{Notifier, PermissionStatus, ScannerBackend, Translator};
use crate::errors::{BackendError, ScanError};
use tracing::{debug, info, warn};

/// Result of a negotiation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionVerdict {
    Granted,
    /// Denied, or the user declined a prompt
    Denied,
    /// Restricted or unknown; assumed denial without prompting
    Undetermined,
}

impl PermissionVerdict {
    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }

    /// The error to report when scanning cannot go ahead
    pub fn as_error(self) -> Option<ScanError> {
        match self {
            Self::Granted => None,
            Self::Denied => Some(ScanError::PermissionDenied),
            Self::Undetermined => Some(ScanError::PermissionUndetermined),
        }
    }
}

/// Make sure scanning is allowed, prompting the user where needed
///
/// Errors from the platform query are returned, never swallowed; the caller
/// decides how to surface them.
pub async fn ensure_permission<S, N, T>(scanner: &S, ui: &UiService<N, T>) -> Result<bool, ScanError>
where
    S: ScannerBackend,
    N: Notifier,
    T: Translator,
{
    negotiate(scanner, ui).await.map(PermissionVerdict::is_granted)
}

/// Full negotiation, keeping the reason a scan is not allowed
pub async fn negotiate<S, N, T>(
    scanner: &S,
    ui: &UiService<N, T>,
) -> Result<PermissionVerdict, ScanError>
where
    S: ScannerBackend,
    N: Notifier,
    T: Translator,
{
    let status = query(scanner).await?;
    debug!(?status, "Camera permission status");

    match status {
        PermissionStatus::Granted => Ok(PermissionVerdict::Granted),
        PermissionStatus::Denied => {
            ui.modal_info("ask-permissions-denied", &[])
                .await
                .map_err(notifier_failure)?;
            if let Err(e) = scanner.open_app_settings().await {
                warn!(error = %e, "Could not open app settings");
            }
            Ok(PermissionVerdict::Denied)
        }
        PermissionStatus::NeverAsked => {
            let accepted = ui
                .confirm("ask-permissions", "accept", &[])
                .await
                .map_err(notifier_failure)?;
            info!(accepted, "Permission prompt answered");
            Ok(if accepted {
                PermissionVerdict::Granted
            } else {
                PermissionVerdict::Denied
            })
        }
        PermissionStatus::Restricted | PermissionStatus::Unknown => {
            info!(?status, "Permission cannot be granted on this device");
            Ok(PermissionVerdict::Undetermined)
        }
        PermissionStatus::Asked => {
            let status = query(scanner).await?;
            debug!(?status, "Camera permission after prompt");
            // Not granted after the prompt means the user declined it
            Ok(if status == PermissionStatus::Granted {
                PermissionVerdict::Granted
            } else {
                PermissionVerdict::Denied
            })
        }
    }
}

async fn query<S: ScannerBackend>(scanner: &S) -> Result<PermissionStatus, ScanError> {
    scanner.check_permission(true).await.map_err(|e| {
        warn!(error = %e, "Permission query failed");
        ScanError::PlatformQueryFailure(e.to_string())
    })
}

fn notifier_failure(err: BackendError) -> ScanError {
    ScanError::PlatformQueryFailure(err.to_string())
}
