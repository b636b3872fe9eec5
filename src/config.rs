use crate::resolver::ConfigResolver;
use crate::site::SiteConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Process configuration read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the declarative site configuration (JSON)
    pub site_config: PathBuf,

    /// Directory that `langDir` is relative to
    pub site_root: PathBuf,

    /// Overrides `nitro.preset` from the site configuration
    pub preset_override: Option<String>,

    // Preview server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let site_config = PathBuf::from(
            std::env::var("SITE_CONFIG").unwrap_or_else(|_| "config/site.json".to_string()),
        );

        // Defaults to the directory holding the site configuration
        let site_root = match std::env::var("SITE_ROOT") {
            Ok(root) => PathBuf::from(root),
            Err(_) => site_config
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".")),
        };

        Ok(Self {
            site_config,
            site_root,
            preset_override: std::env::var("NITRO_PRESET")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        })
    }

    /// Load the site configuration, apply environment overrides and resolve it.
    pub fn load_site(&self) -> Result<SiteConfig> {
        info!("Loading site configuration from {}", self.site_config.display());

        let mut site = SiteConfig::from_file(&self.site_config)
            .with_context(|| format!("Failed to load {}", self.site_config.display()))?;

        if let Some(preset) = &self.preset_override {
            info!(
                "NITRO_PRESET overrides preset '{}' with '{}'",
                site.deployment.preset, preset
            );
            site.deployment.preset = preset.clone();
        }

        ConfigResolver::resolve(site).context("Invalid site configuration")
    }
}
