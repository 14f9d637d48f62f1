use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::http::rate_limiter::RateLimiter;
use crate::transport::http::CrptTransport;
use crate::transport::HttpTransport;

/// Rate-limited client for the CRPT document-creation API.
///
/// All submissions share one limiter; the network call itself runs outside
/// the limiter's critical section, so concurrent submissions serialize only
/// on the rate-limit invariant, not on network latency.
#[derive(Clone)]
pub struct CrptClient {
    limiter: RateLimiter,
    transport: Arc<dyn HttpTransport>,
}

impl CrptClient {
    pub fn new(config: &Config) -> Result<Self> {
        let limiter = RateLimiter::new(
            config.request_limit,
            Duration::from_millis(config.interval_ms),
        )?;
        let transport = CrptTransport::new(config.api_url.clone(), config.auth_token.clone())?;

        Ok(Self {
            limiter,
            transport: Arc::new(transport),
        })
    }

    /// Swap in a different transport (tests, alternative backends).
    pub fn with_transport(limiter: RateLimiter, transport: Arc<dyn HttpTransport>) -> Self {
        Self { limiter, transport }
    }

    /// Submits a document with its detached signature, blocking on the rate
    /// limiter first. Returns the API response body on success.
    ///
    /// The admission is consumed before serialization, so a document that
    /// fails to serialize still counts toward the window.
    pub async fn create_document<T: Serialize>(
        &self,
        document: &T,
        signature: &str,
    ) -> Result<String> {
        self.limiter.acquire().await;

        let payload = serde_json::to_string(document).map_err(AppError::Serialization)?;
        debug!("Submitting document payload of {} bytes", payload.len());

        let response = self.transport.submit(payload, signature).await?;
        if !response.is_success() {
            return Err(AppError::Submission {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.body)
    }
}
