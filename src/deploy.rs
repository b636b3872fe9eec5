//! Deployment targets for the built site.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A known deployment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentPreset {
    /// Cloudflare Workers, service-worker syntax
    Cloudflare,
    /// Cloudflare Workers, ES module syntax
    CloudflareModule,
    CloudflarePages,
    NodeServer,
    /// Prerendered static output
    Static,
}

impl DeploymentPreset {
    pub const ALL: [DeploymentPreset; 5] = [
        DeploymentPreset::Cloudflare,
        DeploymentPreset::CloudflareModule,
        DeploymentPreset::CloudflarePages,
        DeploymentPreset::NodeServer,
        DeploymentPreset::Static,
    ];

    /// Canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentPreset::Cloudflare => "cloudflare",
            DeploymentPreset::CloudflareModule => "cloudflare_module",
            DeploymentPreset::CloudflarePages => "cloudflare_pages",
            DeploymentPreset::NodeServer => "node_server",
            DeploymentPreset::Static => "static",
        }
    }

    pub fn is_cloudflare(&self) -> bool {
        matches!(
            self,
            DeploymentPreset::Cloudflare
                | DeploymentPreset::CloudflareModule
                | DeploymentPreset::CloudflarePages
        )
    }
}

impl FromStr for DeploymentPreset {
    type Err = ConfigError;

    /// Accepts any casing and either `-` or `_` as the word separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == normalized)
            .ok_or_else(|| ConfigError::UnknownDeploymentPreset {
                preset: s.to_string(),
            })
    }
}

impl fmt::Display for DeploymentPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cloudflare-specific build switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudflareOptions {
    /// Generate the Wrangler deploy configuration during the build
    pub deploy_config: bool,

    /// Enable Node.js compatibility in the worker runtime
    pub node_compat: bool,
}

/// The `nitro` section: where and how the site is deployed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    /// Target identifier as declared; canonical after resolution
    pub preset: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloudflare: Option<CloudflareOptions>,
}

impl DeploymentConfig {
    pub fn new(preset: &str) -> Self {
        Self {
            preset: preset.to_string(),
            cloudflare: None,
        }
    }

    /// The parsed target, if the declared preset is known.
    pub fn target(&self) -> Option<DeploymentPreset> {
        self.preset.parse().ok()
    }
}
