//! Reachability checker: one sweep over every URL, then retry passes over
//! the failures with a growing timeout.

use std::time::Duration;

use crate::config::CheckConfig;
use crate::network::Probe;

/// Outcome of a full run
#[derive(Debug)]
pub struct CheckReport {
    /// URLs that never answered successfully, in pending-set order.
    pub failed: Vec<String>,
    /// Passes actually performed (1..=attempts).
    pub passes: u32,
    /// Timeout used on the last pass performed.
    pub last_timeout: Duration,
}

/// Probe every URL, then retry failures until they succeed or attempts run out.
pub async fn run_checks<P: Probe>(
    probe: &P,
    urls: &[String],
    config: &CheckConfig,
) -> CheckReport {
    let total = config.attempts;
    let mut pass = 1;
    let mut timeout = config.timeout_for_pass(pass);

    let mut pending = Vec::new();
    for url in urls {
        tracing::info!(
            "(attempt {}/{}) checking url: {} with timeout {:.1}s",
            pass,
            total,
            url,
            timeout.as_secs_f64()
        );
        if probe.check_reachable(url, timeout).await {
            tracing::info!("{} is valid", url);
        } else {
            tracing::info!("{} was unreachable", url);
            pending.push(url.clone());
        }
    }

    while pass < total && !pending.is_empty() {
        pass += 1;
        timeout = config.timeout_for_pass(pass);
        tracing::info!("Setting timeout to {:.1}s", timeout.as_secs_f64());

        let mut still_failing = Vec::with_capacity(pending.len());
        for url in pending {
            tracing::info!(
                "retrying url (attempt {}/{}): {} with timeout {:.1}s",
                pass,
                total,
                url,
                timeout.as_secs_f64()
            );
            if probe.check_reachable(&url, timeout).await {
                tracing::info!("{} is valid", url);
            } else {
                tracing::info!("{} is still unreachable", url);
                still_failing.push(url);
            }
        }
        pending = still_failing;
    }

    CheckReport {
        failed: pending,
        passes: pass,
        last_timeout: timeout,
    }
}
