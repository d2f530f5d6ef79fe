// SPDX-License-Identifier: GPL-3.0-only
// Backends are consumed through generics and awaited on a single task
#![allow(async_fn_in_trait)]

//! External capability abstraction
//!
//! The scan flow never talks to a camera, a browser, or a dialog directly.
//! It goes through these narrow traits so the platform pieces can be swapped:
//!
//! ```text
//! ┌─────────────────────┐
//! │   ScanController    │
//! └──────────┬──────────┘
//!            │
//!   ┌────────┼─────────┬────────────┐
//!   ▼        ▼         ▼            ▼
//! Scanner  Browser  Notifier   Translator
//! ```

pub mod browser;
pub mod image_scanner;
pub mod terminal;
pub mod types;

pub use browser::SystemBrowser;
pub use image_scanner::ImageScanner;
pub use terminal::TerminalNotifier;
pub use types::*;

use crate::errors::BackendResult;
use std::time::Duration;

/// Barcode scanner plugin
pub trait ScannerBackend {
    /// Query the camera permission
    ///
    /// With `force` the platform may show its own permission prompt, in which
    /// case the result reports [`PermissionStatus::Asked`].
    async fn check_permission(&self, force: bool) -> BackendResult<PermissionStatus>;

    /// Run the scanner until a code is decoded or the user cancels
    ///
    /// Cancellation is not an error: it yields a result without content.
    async fn start_scan(&self, options: &ScanOptions) -> BackendResult<ScanResult>;

    /// Toggle the torch, if the device has one
    async fn toggle_torch(&self) -> BackendResult<()>;

    /// Send the user to the settings page where the permission can be changed
    async fn open_app_settings(&self) -> BackendResult<()>;
}

/// Hands a URL off to the system browser
pub trait BrowserOpener {
    async fn open(&self, url: &str) -> BackendResult<()>;
}

/// Alert and toast presentation
pub trait Notifier {
    /// Show a blocking message with a single button, resolving once acknowledged
    async fn alert(&self, header: &str, body: &str, accept: &str) -> BackendResult<()>;

    /// Show a blocking message with accept and cancel buttons
    async fn confirm(
        &self,
        header: &str,
        body: &str,
        accept: &str,
        cancel: &str,
    ) -> BackendResult<bool>;

    /// Show a transient message; never blocks
    fn toast(&self, message: &str, duration: Duration, style: ToastStyle);
}

/// Localized string lookup
pub trait Translator {
    /// Translate `key`, substituting named `args`
    ///
    /// Returns the key itself when no translation exists.
    fn translate(&self, key: &str, args: &[(&str, &str)]) -> String;
}

impl<T: ScannerBackend> ScannerBackend for &T {
    async fn check_permission(&self, force: bool) -> BackendResult<PermissionStatus> {
        (**self).check_permission(force).await
    }

    async fn start_scan(&self, options: &ScanOptions) -> BackendResult<ScanResult> {
        (**self).start_scan(options).await
    }

    async fn toggle_torch(&self) -> BackendResult<()> {
        (**self).toggle_torch().await
    }

    async fn open_app_settings(&self) -> BackendResult<()> {
        (**self).open_app_settings().await
    }
}

impl<T: BrowserOpener> BrowserOpener for &T {
    async fn open(&self, url: &str) -> BackendResult<()> {
        (**self).open(url).await
    }
}

impl<T: Notifier> Notifier for &T {
    async fn alert(&self, header: &str, body: &str, accept: &str) -> BackendResult<()> {
        (**self).alert(header, body, accept).await
    }

    async fn confirm(
        &self,
        header: &str,
        body: &str,
        accept: &str,
        cancel: &str,
    ) -> BackendResult<bool> {
        (**self).confirm(header, body, accept, cancel).await
    }

    fn toast(&self, message: &str, duration: Duration, style: ToastStyle) {
        (**self).toast(message, duration, style)
    }
}

impl<T: Translator> Translator for &T {
    fn translate(&self, key: &str, args: &[(&str, &str)]) -> String {
        (**self).translate(key, args)
    }
}
