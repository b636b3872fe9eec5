//! Build-time check of the site configuration.
//!
//! Resolves the configuration, verifies every locale resource file exists and
//! prints the effective configuration as JSON. Exits non-zero on any problem
//! so the build aborts.

use anyhow::{bail, Result};
use qr_worker_config::config::Config;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored in CI)
    let _ = dotenvy::dotenv();

    // Logs go to stderr, stdout carries the resolved configuration
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("qr_worker_config=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let site = config.load_site()?;

    let missing = site.missing_resources(&config.site_root);
    if !missing.is_empty() {
        for path in &missing {
            warn!("Missing locale resource: {}", path.display());
        }
        bail!("{} locale resource file(s) missing", missing.len());
    }
    info!("✓ All {} locale resources present", site.locales.len());

    if let Some(url) = site.fonts.stylesheet_url() {
        info!("Font stylesheet: {}", url);
    }

    println!("{}", serde_json::to_string_pretty(&site)?);
    Ok(())
}
