pub mod http;

use async_trait::async_trait;

use crate::error::Result;

/// Outcome of one network exchange with the documents API.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single exchange against the pre-configured endpoint.
/// The payload is already serialized; the signature travels as metadata.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn submit(&self, payload: String, signature: &str) -> Result<TransportResponse>;
}
