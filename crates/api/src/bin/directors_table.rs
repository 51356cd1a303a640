//! Print the directors table the web client renders.
//!
//! Usage: CATALOG_ENDPOINT=http://localhost:8080/graphql cargo run --bin directors-table

use api::client::CatalogClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let endpoint = std::env::var("CATALOG_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:8080/graphql".to_string());

    let client = CatalogClient::new(endpoint);
    let directors = client.directors().await?;

    println!("{}", api::client::render_table(&directors));
    Ok(())
}
