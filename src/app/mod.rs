// SPDX-License-Identifier: GPL-3.0-only

//! Scan flow
//!
//! On view entry the [`controller`] negotiates camera permission, brings up
//! the scanner, validates what it decodes, and either opens the link or tells
//! the user there was none.

pub mod controller;
pub mod delay;
pub mod outcome;
pub mod permission;
pub mod presenter;
pub mod state;
pub mod ui;
pub mod validator;

pub use controller::ScanController;
pub use outcome::ScanOutcome;
pub use permission::{PermissionVerdict, ensure_permission};
pub use state::{DisplayAsset, ScanPhase, ScanSession};
pub use ui::UiService;
pub use validator::{ValidatedUrl, is_url_like};
