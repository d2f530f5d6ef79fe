// SPDX-License-Identifier: GPL-3.0-only

//! Localized alerts and toasts
//!
//! Wraps a [`Notifier`] and a [`Translator`] so callers deal in message keys.
//! Alert keys resolve to `modal-header-<key>` and `modal-body-<key>`, success
//! toasts to `succ-<key>`, and error toasts to `err-<key>`.

use crate::backends::{Notifier, ToastStyle, Translator};
use crate::constants::DEFAULT_TOAST_DURATION;
use crate::errors::BackendResult;
use std::time::Duration;
use tracing::{debug, error};

const MODAL_HEADER: &str = "modal-header";
const MODAL_BODY: &str = "modal-body";
const SUCCESS: &str = "succ";
const ERROR: &str = "err";

pub struct UiService<N, T> {
    notifier: N,
    translator: T,
    toast_duration: Duration,
}

impl<N: Notifier, T: Translator> UiService<N, T> {
    pub fn new(notifier: N, translator: T) -> Self {
        Self {
            notifier,
            translator,
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    /// Translate `key`, looking up `<prefix>-<key>` when a prefix is given
    pub fn translate(&self, key: &str, args: &[(&str, &str)], prefix: Option<&str>) -> String {
        match prefix {
            Some(prefix) => self
                .translator
                .translate(&format!("{}-{}", prefix, key), args),
            None => self.translator.translate(key, args),
        }
    }

    /// Informative alert; resolves once the user acknowledges it
    pub async fn modal_info(&self, key: &str, args: &[(&str, &str)]) -> BackendResult<()> {
        let header = self.translate(key, &[], Some(MODAL_HEADER));
        let body = self.translate(key, args, Some(MODAL_BODY));
        let accept = self.translate("accept", &[], None);

        debug!(key, "Showing info alert");
        self.notifier.alert(&header, &body, &accept).await
    }

    /// Accept/cancel alert; resolves to the user's choice
    pub async fn confirm(
        &self,
        key: &str,
        accept_key: &str,
        args: &[(&str, &str)],
    ) -> BackendResult<bool> {
        let header = self.translate(key, &[], Some(MODAL_HEADER));
        let body = self.translate(key, args, Some(MODAL_BODY));
        let accept = self.translate(accept_key, &[], None);
        let cancel = self.translate("cancel", &[], None);

        debug!(key, "Showing confirmation");
        self.notifier.confirm(&header, &body, &accept, &cancel).await
    }

    /// Toast confirming that something worked
    pub fn success(&self, key: &str, args: &[(&str, &str)]) {
        let message = self.translate(key, args, Some(SUCCESS));
        self.notifier
            .toast(&message, self.toast_duration, ToastStyle::Simple);
    }

    /// Error-styled toast
    pub fn error(&self, key: &str) {
        error!(key, "Reporting error to user");
        let message = self.translate(key, &[], Some(ERROR));
        self.notifier
            .toast(&message, self.toast_duration, ToastStyle::Error);
    }
}
