// SPDX-License-Identifier: GPL-3.0-only

//! QR Scan - scan a QR code and open the link it carries
//!
//! # Architecture
//!
//! - [`app`]: the scan flow (permission, scanner session, validation, presentation)
//! - [`backends`]: scanner, browser, notification, and translation capabilities
//! - [`config`]: user configuration handling
//! - [`i18n`]: Fluent localization
//!
//! # Example
//!
//! ```ignore
//! let ui = UiService::new(TerminalNotifier::new(), FluentTranslator);
//! let controller = ScanController::new(ImageScanner::new("code.png"), SystemBrowser, ui);
//! let outcome = controller.on_view_enter().await;
//! ```

pub mod app;
pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod i18n;

// Re-export commonly used types
pub use app::{ScanController, ScanOutcome, UiService, ValidatedUrl, is_url_like};
pub use config::Config;
pub use errors::{AppError, AppResult, BackendError, ScanError};
