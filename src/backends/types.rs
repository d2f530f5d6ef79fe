// SPDX-License-Identifier: GPL-3.0-only

//! Types shared between the scan flow and its backends

/// Camera permission as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// Access is granted
    Granted,
    /// The user denied access
    Denied,
    /// The platform showed its own prompt during this query
    Asked,
    /// The permission has never been requested
    NeverAsked,
    /// Access is blocked by policy (parental controls, MDM)
    Restricted,
    /// The platform could not tell
    Unknown,
}

/// Barcode symbologies a scan can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeFormat {
    QrCode,
}

/// Options passed to [`ScannerBackend::start_scan`](super::ScannerBackend::start_scan)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub targeted_formats: Vec<BarcodeFormat>,
}

impl ScanOptions {
    /// Target QR codes only
    pub fn qr_only() -> Self {
        Self {
            targeted_formats: vec![BarcodeFormat::QrCode],
        }
    }

    pub fn targets(&self, format: BarcodeFormat) -> bool {
        self.targeted_formats.contains(&format)
    }
}

/// What the scanner returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// False when the user cancelled
    pub has_content: bool,
    /// Raw decoded text
    pub content: String,
}

impl ScanResult {
    pub fn decoded(content: impl Into<String>) -> Self {
        Self {
            has_content: true,
            content: content.into(),
        }
    }

    pub fn cancelled() -> Self {
        Self {
            has_content: false,
            content: String::new(),
        }
    }
}

/// Visual style of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastStyle {
    #[default]
    Simple,
    Error,
}
