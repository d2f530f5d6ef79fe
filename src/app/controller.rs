// SPDX-License-Identifier: GPL-3.0-only

//! Scan session controller
//!
//! ```text
//! Idle ──view entry──▶ RequestingPermission ──granted──▶ Scanning ──scan returns──▶ Idle
//!                              │ not granted                 ▲
//!                              ▼                             │ start while overlay up:
//!                             Idle                           └─ ignored, no state change
//! ```
//!
//! Everything runs on the task that awaits the controller. Exclusivity comes
//! from the overlay guard in [`ScanController::start_scan`], not from a lock.

use super::permission::negotiate;
use super::presenter::present;
use super::outcome::ScanOutcome;
use super::state::{DisplayAsset, ScanPhase, ScanSession};
use super::ui::UiService;
use crate::backends::{BrowserOpener, Notifier, ScanOptions, ScannerBackend, Translator};
use crate::errors::BackendResult;
use tokio::sync::watch;
use tracing::{debug, info, warn};

pub struct ScanController<S, B, N, T> {
    scanner: S,
    browser: B,
    ui: UiService<N, T>,
    session: watch::Sender<ScanSession>,
    display: watch::Sender<DisplayAsset>,
}

impl<S, B, N, T> ScanController<S, B, N, T>
where
    S: ScannerBackend,
    B: BrowserOpener,
    N: Notifier,
    T: Translator,
{
    pub fn new(scanner: S, browser: B, ui: UiService<N, T>) -> Self {
        Self {
            scanner,
            browser,
            ui,
            session: watch::Sender::new(ScanSession::default()),
            display: watch::Sender::new(DisplayAsset::default()),
        }
    }

    /// Current session state
    pub fn session(&self) -> ScanSession {
        *self.session.borrow()
    }

    /// Follow session changes (overlay marker, phase)
    pub fn subscribe_session(&self) -> watch::Receiver<ScanSession> {
        self.session.subscribe()
    }

    /// Follow the artwork the screen should show
    pub fn subscribe_display(&self) -> watch::Receiver<DisplayAsset> {
        self.display.subscribe()
    }

    /// The screen became visible: negotiate permission, then scan
    pub async fn on_view_enter(&self) -> ScanOutcome {
        if self.session().overlay_active {
            info!("View entered while a scan is running, ignoring");
            return ScanOutcome::AlreadyScanning;
        }

        self.display.send_replace(DisplayAsset::Waiting);
        self.set_phase(ScanPhase::RequestingPermission);

        let verdict = match negotiate(&self.scanner, &self.ui).await {
            Ok(verdict) => verdict,
            Err(err) => {
                // Treated as denied, but the user hears about it
                warn!(error = %err, "Permission check failed");
                self.set_phase(ScanPhase::Idle);
                self.ui.error("permission-check-failed");
                return ScanOutcome::NotPermitted(err);
            }
        };

        if let Some(err) = verdict.as_error() {
            info!(?verdict, "Scanning not permitted");
            self.set_phase(ScanPhase::Idle);
            return ScanOutcome::NotPermitted(err);
        }

        self.start_scan().await
    }

    /// Bring up the scanner and handle whatever it returns
    ///
    /// A no-op returning [`ScanOutcome::AlreadyScanning`] while the overlay is up.
    pub async fn start_scan(&self) -> ScanOutcome {
        let started = self.session.send_if_modified(|session| {
            if session.overlay_active {
                return false;
            }
            *session = ScanSession {
                phase: ScanPhase::Scanning,
                overlay_active: true,
            };
            true
        });

        if !started {
            info!("Scan already in progress, not starting another");
            return ScanOutcome::AlreadyScanning;
        }

        debug!("Scanner overlay up");
        let result = self.scanner.start_scan(&ScanOptions::qr_only()).await;

        // Overlay comes down as soon as the scanner returns, whatever it found
        self.session.send_replace(ScanSession::default());
        debug!("Scanner overlay down");

        match result {
            Ok(result) if result.has_content => {
                present(&result, &self.browser, &self.ui, &self.display).await
            }
            Ok(_) => {
                info!("Scan cancelled");
                ScanOutcome::Cancelled
            }
            Err(err) => {
                warn!(error = %err, "Scanner failed");
                self.ui.error("scanner-failed");
                ScanOutcome::ScannerFailed(err)
            }
        }
    }

    /// Forward to the scanner's torch; scan state is untouched
    pub async fn toggle_torch(&self) -> BackendResult<()> {
        self.scanner.toggle_torch().await.inspect_err(|err| {
            warn!(error = %err, "Torch toggle failed");
            self.ui.error("torch-unavailable");
        })
    }

    fn set_phase(&self, phase: ScanPhase) {
        self.session.send_modify(|session| session.phase = phase);
    }
}
