use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::http::pool;
use crate::transport::{HttpTransport, TransportResponse};

/// Reqwest-backed transport posting JSON documents to the CRPT endpoint.
#[derive(Debug, Clone)]
pub struct CrptTransport {
    client: Client,
    url: String,
    auth_token: String,
}

impl CrptTransport {
    pub fn new(url: String, auth_token: String) -> Result<Self> {
        let client = pool::create_http_client()?;
        Ok(Self {
            client,
            url,
            auth_token,
        })
    }
}

#[async_trait]
impl HttpTransport for CrptTransport {
    async fn submit(&self, payload: String, signature: &str) -> Result<TransportResponse> {
        let start = std::time::Instant::now();

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header("Signature", signature)
            .bearer_auth(&self.auth_token)
            .body(payload)
            .send()
            .await
            .map_err(AppError::Http)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(AppError::Http)?;
        debug!("Document exchange finished in {}ms, status {}", start.elapsed().as_millis(), status);

        Ok(TransportResponse { status, body })
    }
}
