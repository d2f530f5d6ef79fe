// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands
//!
//! - Scanning an image and opening its link
//! - Checking text against the link heuristic
//! - Opening the configuration directory, seeding a default config file

use qrscan::app::{ScanController, ScanOutcome, UiService};
use qrscan::backends::{ImageScanner, SystemBrowser, TerminalNotifier};
use qrscan::i18n::FluentTranslator;
use qrscan::{Config, fl, is_url_like};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Run one scan session against an image
pub async fn scan(
    config: &Config,
    image: PathBuf,
    follow: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut scanner = ImageScanner::new(image).with_max_dimension(config.max_scan_dimension);
    if follow {
        scanner = scanner.following(config.follow_interval());
    }
    if let Some(dir) = Config::dir() {
        scanner = scanner.with_settings_dir(dir);
    }

    let ui = UiService::new(TerminalNotifier::new(), FluentTranslator)
        .with_toast_duration(config.toast_duration());
    let controller = ScanController::new(scanner, SystemBrowser::new(), ui);

    let outcome = controller.on_view_enter().await;
    info!(?outcome, "Scan session finished");
    println!("{}", describe(&outcome));

    Ok(if outcome.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Print whether `text` passes the link heuristic
pub fn check(text: &str) -> ExitCode {
    if is_url_like(text) {
        println!("{}", fl!("check-url-like", text = text));
        ExitCode::SUCCESS
    } else {
        println!("{}", fl!("check-not-url", text = text));
        ExitCode::FAILURE
    }
}

/// Open the configuration directory in the file manager
pub fn open_settings() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let path = Config::path().ok_or("No configuration directory on this platform")?;
    Config::write_default_if_missing(&path)?;
    let dir = path.parent().ok_or("Config file has no parent directory")?;
    open::that_detached(dir)?;
    println!("{}", dir.display());
    Ok(ExitCode::SUCCESS)
}

fn describe(outcome: &ScanOutcome) -> String {
    match outcome {
        ScanOutcome::Opened(url) => fl!("outcome-opened", url = url.as_str()),
        ScanOutcome::Rejected(_) => fl!("outcome-rejected"),
        ScanOutcome::Cancelled => fl!("outcome-cancelled"),
        ScanOutcome::NotPermitted(_) => fl!("outcome-not-permitted"),
        ScanOutcome::AlreadyScanning => fl!("outcome-busy"),
        ScanOutcome::OpenFailed { reason, .. } | ScanOutcome::ScannerFailed(reason) => {
            fl!("outcome-failed", reason = reason.to_string())
        }
    }
}
