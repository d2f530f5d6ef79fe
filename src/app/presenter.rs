// SPDX-License-Identifier: GPL-3.0-only

//! Scan result presentation

use super::delay::wait;
use super::outcome::ScanOutcome;
use super::state::DisplayAsset;
use super::ui::UiService;
use super::validator::ValidatedUrl;
use crate::backends::{BrowserOpener, Notifier, ScanResult, Translator};
use crate::constants::transition;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Turn a decoded result into either a browser hand-off or a "no-url" alert
pub async fn present<B, N, T>(
    result: &ScanResult,
    browser: &B,
    ui: &UiService<N, T>,
    display: &watch::Sender<DisplayAsset>,
) -> ScanOutcome
where
    B: BrowserOpener,
    N: Notifier,
    T: Translator,
{
    let url = match ValidatedUrl::parse(&result.content) {
        Ok(url) => url,
        Err(err) => {
            debug!(content = %result.content, "Scanned content is not a URL");
            if let Err(e) = ui
                .modal_info("no-url", &[("message", result.content.as_str())])
                .await
            {
                warn!(error = %e, "Could not show no-url alert");
            }
            return ScanOutcome::Rejected(err);
        }
    };

    // Cosmetic only: masks the gap before the browser shows up
    display.send_replace(DisplayAsset::Found);
    wait(transition::FOUND_DELAY).await;
    display.send_replace(DisplayAsset::Opening);
    wait(transition::OPENING_DELAY).await;

    match browser.open(url.as_str()).await {
        Ok(()) => {
            info!(url = %url, "Handed URL to browser");
            ui.success("url-opened", &[("url", url.as_str())]);
            ScanOutcome::Opened(url)
        }
        Err(reason) => {
            warn!(url = %url, error = %reason, "Browser hand-off failed");
            ui.error("browser-failed");
            ScanOutcome::OpenFailed { url, reason }
        }
    }
}
