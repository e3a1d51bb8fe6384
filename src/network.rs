//! HTTP reachability probe

use std::time::Duration;

use reqwest::{redirect, Client, StatusCode};

use crate::error::ValidatorError;

/// Maximum redirect hops followed by a probe
const MAX_REDIRECTS: usize = 10;

/// A single reachability check of one URL with one timeout.
///
/// Implementations must not fail: anything that is not a confirmed
/// success is reported as `false`.
pub trait Probe {
    async fn check_reachable(&self, url: &str, timeout: Duration) -> bool;
}

/// Probe backed by an HTTP HEAD request that follows redirects
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new() -> Result<Self, ValidatorError> {
        let client = Client::builder()
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { client })
    }
}

impl Probe for HttpProbe {
    async fn check_reachable(&self, url: &str, timeout: Duration) -> bool {
        tracing::debug!("HEAD {} (timeout {:?})", url, timeout);
        match self.client.head(url).timeout(timeout).send().await {
            Ok(r) if r.status() == StatusCode::OK => true,
            Ok(r) => {
                tracing::debug!("{} answered with status {}", url, r.status());
                false
            }
            Err(e) => {
                tracing::debug!("{} probe error: {}", url, e);
                false
            }
        }
    }
}
