// SPDX-License-Identifier: GPL-3.0-only

//! Observable scan state
//!
//! The controller owns these values and publishes them through `watch`
//! channels; presentation code subscribes instead of polling shared flags.

/// Where the scan flow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPhase {
    /// Nothing in progress
    #[default]
    Idle,
    /// Waiting on the permission negotiation
    RequestingPermission,
    /// Native scan call outstanding
    Scanning,
}

/// State of one screen visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSession {
    pub phase: ScanPhase,
    /// Live camera view is up; normal screen content should be hidden
    pub overlay_active: bool,
}

impl ScanSession {
    pub fn is_scanning(&self) -> bool {
        self.phase == ScanPhase::Scanning
    }
}

/// Artwork shown on the screen while a result is being handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayAsset {
    #[default]
    Waiting,
    /// A link was found
    Found,
    /// About to hand off to the browser
    Opening,
}
