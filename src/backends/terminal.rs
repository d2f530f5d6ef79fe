// SPDX-License-Identifier: GPL-3.0-only

//! Terminal notification layer
//!
//! Alerts and confirmations are printed to stdout and answered on stdin.
//! Toasts are single styled lines on stderr.

use super::{Notifier, ToastStyle};
use crate::errors::{BackendError, BackendResult};
use crossterm::style::Stylize;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tracing::{debug, info, trace};

/// Notifier reading answers from the terminal
pub struct TerminalNotifier<R = Stdin> {
    input: Mutex<Lines<BufReader<R>>>,
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::with_input(tokio::io::stdin())
    }
}

impl<R: AsyncRead + Unpin> TerminalNotifier<R> {
    /// Answer prompts from `input` instead of stdin
    pub fn with_input(input: R) -> Self {
        Self {
            input: Mutex::new(BufReader::new(input).lines()),
        }
    }

    /// Wait for one line of input; `None` on end of input or Ctrl-C
    async fn read_answer(&self) -> BackendResult<Option<String>> {
        let mut input = self.input.lock().await;
        next_answer(&mut input, tokio::signal::ctrl_c()).await
    }

    fn print_message(header: &str, body: &str) -> BackendResult<()> {
        let mut stdout = std::io::stdout();
        writeln!(stdout)
            .and_then(|_| writeln!(stdout, "{}", header.bold()))
            .and_then(|_| writeln!(stdout, "{}", body))
            .map_err(|e| BackendError::Notifier(e.to_string()))
    }

    fn print_prompt(prompt: &str) -> BackendResult<()> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{} ", prompt)
            .and_then(|_| stdout.flush())
            .map_err(|e| BackendError::Notifier(e.to_string()))
    }
}

/// Next line from `lines`, unless `interrupt` fires first
///
/// An interrupt reads as end of input, so a pending prompt is declined.
async fn next_answer<R, F>(lines: &mut Lines<R>, interrupt: F) -> BackendResult<Option<String>>
where
    R: AsyncBufRead + Unpin,
    F: Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        line = lines.next_line() => line.map_err(|e| BackendError::Notifier(e.to_string())),
        Ok(()) = interrupt => {
            info!("Interrupted while waiting for an answer");
            Ok(None)
        }
    }
}

impl<R: AsyncRead + Unpin> Notifier for TerminalNotifier<R> {
    async fn alert(&self, header: &str, body: &str, accept: &str) -> BackendResult<()> {
        Self::print_message(header, body)?;
        Self::print_prompt(&format!("[{}]", accept.green()))?;

        if self.read_answer().await?.is_none() {
            debug!("Input closed or interrupted, treating alert as acknowledged");
        }
        Ok(())
    }

    async fn confirm(
        &self,
        header: &str,
        body: &str,
        accept: &str,
        cancel: &str,
    ) -> BackendResult<bool> {
        Self::print_message(header, body)?;
        Self::print_prompt(&format!("1) {}  2) {} >", accept.green(), cancel.red()))?;

        let confirmed = self
            .read_answer()
            .await?
            .is_some_and(|answer| is_acceptance(&answer, accept));
        debug!(confirmed, "Confirmation answered");
        Ok(confirmed)
    }

    fn toast(&self, message: &str, duration: Duration, style: ToastStyle) {
        trace!(duration_ms = duration.as_millis(), ?style, "Toast");
        match style {
            ToastStyle::Simple => eprintln!("{}", message.cyan()),
            ToastStyle::Error => eprintln!("{}", message.red().bold()),
        }
    }
}

/// Whether a typed answer picks the accept button
fn is_acceptance(answer: &str, accept: &str) -> bool {
    let answer = answer.trim();
    answer == "1" || (!answer.is_empty() && answer.eq_ignore_ascii_case(accept.trim()))
}
