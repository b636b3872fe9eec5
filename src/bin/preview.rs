//! Preview server - applies locale routing to real requests without deploying
//!
//! Usage:
//!   cargo run --bin preview
//!   curl -i -H 'Accept-Language: de-DE,de;q=0.9' http://localhost:3000/
//!
//! Optional environment variables:
//! - SITE_CONFIG (defaults to config/site.json)
//! - NITRO_PRESET (overrides nitro.preset)
//! - PORT (defaults to 3000)

use anyhow::{Context, Result};
use qr_worker_config::{config::Config, server};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("qr_worker_config=debug".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let site = Arc::new(config.load_site()?);

    let app = server::router(site);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Preview server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
