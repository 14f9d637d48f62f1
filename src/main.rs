mod api;
mod config;
mod error;
mod http;
mod transport;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::api::client::CrptClient;
use crate::api::document::{Description, Document, Product};
use crate::config::Config;
use crate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .init();

    info!("Starting CRPT document client...");
    info!(
        "Rate limit: {} requests per {}ms, endpoint: {}",
        config.request_limit, config.interval_ms, config.api_url
    );

    let client = CrptClient::new(&config)?;

    let document = Document {
        description: Description {
            participant_inn: "123456789".to_string(),
        },
        doc_id: "doc1".to_string(),
        doc_status: "DRAFT".to_string(),
        import_request: true,
        owner_inn: "123456789".to_string(),
        participant_inn: "123456789".to_string(),
        producer_inn: "123456789".to_string(),
        production_date: "2020-01-23".to_string(),
        production_type: "type1".to_string(),
        products: vec![Product {
            certificate_document: "doc".to_string(),
            certificate_document_date: "2020-01-23".to_string(),
            certificate_document_number: "123".to_string(),
            owner_inn: "123456789".to_string(),
            producer_inn: "123456789".to_string(),
            production_date: "2020-01-23".to_string(),
            tnved_code: "code".to_string(),
            uit_code: "uit".to_string(),
            uitu_code: "uitu".to_string(),
        }],
        reg_date: "2020-01-23".to_string(),
        reg_number: "reg1".to_string(),
        ..Document::default()
    };

    match client.create_document(&document, "signature").await {
        Ok(body) => info!("Document accepted: {}", body),
        Err(e) => error!("Submission failed: {}", e),
    }

    Ok(())
}
