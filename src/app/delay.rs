// SPDX-License-Identifier: GPL-3.0-only

//! Pauses used to sequence UI transitions

use std::time::Duration;
use tracing::trace;

/// Suspend the current flow for `duration`
pub async fn wait(duration: Duration) {
    trace!(ms = duration.as_millis(), "Waiting");
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_wait_advances_clock() {
        let start = tokio::time::Instant::now();
        wait(Duration::from_millis(250)).await;
        assert!(start.elapsed() >= Duration::from_millis(250));
    }
}
