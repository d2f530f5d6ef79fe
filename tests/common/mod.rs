// SPDX-License-Identifier: GPL-3.0-only

//! Recording backends for exercising the scan flow

#![allow(dead_code)]

use qrscan::backends::{
    BrowserOpener, Notifier, PermissionStatus, ScanOptions, ScanResult, ScannerBackend,
    ToastStyle, Translator,
};
use qrscan::errors::{BackendError, BackendResult};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

/// Scanner answering from scripted queues
#[derive(Default)]
pub struct MockScanner {
    statuses: Mutex<VecDeque<BackendResult<PermissionStatus>>>,
    results: Mutex<VecDeque<BackendResult<ScanResult>>>,
    /// When set, `start_scan` waits for a notification before returning
    gate: Option<Arc<Notify>>,
    pub permission_checks: AtomicUsize,
    pub scans: AtomicUsize,
    pub settings_opened: AtomicUsize,
    pub torch_toggles: AtomicUsize,
}

impl MockScanner {
    pub fn with_statuses(statuses: impl IntoIterator<Item = PermissionStatus>) -> Self {
        let scanner = Self::default();
        scanner
            .statuses
            .lock()
            .unwrap()
            .extend(statuses.into_iter().map(Ok));
        scanner
    }

    pub fn granted() -> Self {
        Self::with_statuses([PermissionStatus::Granted])
    }

    pub fn failing_permission(message: &str) -> Self {
        let scanner = Self::default();
        scanner
            .statuses
            .lock()
            .unwrap()
            .push_back(Err(BackendError::PermissionQuery(message.to_string())));
        scanner
    }

    pub fn then_scan(self, result: BackendResult<ScanResult>) -> Self {
        self.results.lock().unwrap().push_back(result);
        self
    }

    pub fn then_status(self, status: PermissionStatus) -> Self {
        self.statuses.lock().unwrap().push_back(Ok(status));
        self
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn scans(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }

    pub fn permission_checks(&self) -> usize {
        self.permission_checks.load(Ordering::SeqCst)
    }

    pub fn settings_opened(&self) -> usize {
        self.settings_opened.load(Ordering::SeqCst)
    }
}

impl ScannerBackend for MockScanner {
    async fn check_permission(&self, _force: bool) -> BackendResult<PermissionStatus> {
        self.permission_checks.fetch_add(1, Ordering::SeqCst);
        self.statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(PermissionStatus::Granted))
    }

    async fn start_scan(&self, options: &ScanOptions) -> BackendResult<ScanResult> {
        assert_eq!(options, &ScanOptions::qr_only());
        self.scans.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ScanResult::cancelled()))
    }

    async fn toggle_torch(&self) -> BackendResult<()> {
        self.torch_toggles.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn open_app_settings(&self) -> BackendResult<()> {
        self.settings_opened.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Browser remembering every URL it was given
#[derive(Default)]
pub struct MockBrowser {
    pub opened: Mutex<Vec<String>>,
    pub fail: bool,
}

impl MockBrowser {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl BrowserOpener for MockBrowser {
    async fn open(&self, url: &str) -> BackendResult<()> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail {
            Err(BackendError::Browser("no handler".to_string()))
        } else {
            Ok(())
        }
    }
}

/// A dialog the notifier was asked to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub header: String,
    pub body: String,
}

/// Notifier recording dialogs and toasts
#[derive(Default)]
pub struct MockNotifier {
    pub alerts: Mutex<Vec<Dialog>>,
    pub confirms: Mutex<Vec<Dialog>>,
    pub toasts: Mutex<Vec<(String, ToastStyle)>>,
    pub confirm_answer: bool,
}

impl MockNotifier {
    pub fn answering(confirm_answer: bool) -> Self {
        Self {
            confirm_answer,
            ..Self::default()
        }
    }

    pub fn alerts(&self) -> Vec<Dialog> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn confirms(&self) -> Vec<Dialog> {
        self.confirms.lock().unwrap().clone()
    }

    pub fn toasts(&self) -> Vec<(String, ToastStyle)> {
        self.toasts.lock().unwrap().clone()
    }

    pub fn dialog_count(&self) -> usize {
        self.alerts.lock().unwrap().len() + self.confirms.lock().unwrap().len()
    }
}

impl Notifier for MockNotifier {
    async fn alert(&self, header: &str, body: &str, _accept: &str) -> BackendResult<()> {
        self.alerts.lock().unwrap().push(Dialog {
            header: header.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }

    async fn confirm(
        &self,
        header: &str,
        body: &str,
        _accept: &str,
        _cancel: &str,
    ) -> BackendResult<bool> {
        self.confirms.lock().unwrap().push(Dialog {
            header: header.to_string(),
            body: body.to_string(),
        });
        Ok(self.confirm_answer)
    }

    fn toast(&self, message: &str, _duration: Duration, style: ToastStyle) {
        self.toasts.lock().unwrap().push((message.to_string(), style));
    }
}

/// Translator echoing keys, with args appended as `[name=value]`
#[derive(Default, Clone, Copy)]
pub struct KeyTranslator;

impl Translator for KeyTranslator {
    fn translate(&self, key: &str, args: &[(&str, &str)]) -> String {
        if args.is_empty() {
            return key.to_string();
        }
        let args: Vec<String> = args
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        format!("{}[{}]", key, args.join(","))
    }
}
