//! Site configuration model.
//!
//! `SiteFile` mirrors the declarative payload as it is written on disk (nested
//! `i18n`, `googleFonts`, `nitro` sections). `SiteConfig` is the flattened
//! value the resolver validates and the routing layer consumes.

use crate::deploy::{CloudflareOptions, DeploymentConfig};
use crate::error::ConfigError;
use crate::fonts::FontConfig;
use crate::i18n::{DetectBrowserLanguage, DetectionPolicy, LocaleEntry, RoutingStrategy};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Document head defaults applied to every page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeadConfig {
    /// Page title template, `%s` is replaced by the page title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_template: Option<String>,

    /// `<meta>` tags as attribute maps
    pub meta: Vec<BTreeMap<String, String>>,

    /// `<link>` tags as attribute maps
    pub link: Vec<BTreeMap<String, String>>,
}

impl HeadConfig {
    /// Render the document title for a page.
    ///
    /// Without a page title the template's placeholder and the separator
    /// around it are dropped, leaving the site name.
    pub fn render_title(&self, page_title: Option<&str>) -> String {
        match (self.title_template.as_deref(), page_title) {
            (Some(template), Some(page)) => template.replace("%s", page),
            (Some(template), None) => template
                .replace("%s", "")
                .trim_matches(|c: char| c.is_whitespace() || matches!(c, '|' | '-' | '·' | ':'))
                .to_string(),
            (None, Some(page)) => page.to_string(),
            (None, None) => String::new(),
        }
    }

    /// Content of the `<meta>` tag whose `name` or `property` matches.
    pub fn meta_content(&self, key: &str) -> Option<&str> {
        self.meta
            .iter()
            .find(|tag| {
                tag.get("name").map(String::as_str) == Some(key)
                    || tag.get("property").map(String::as_str) == Some(key)
            })
            .and_then(|tag| tag.get("content"))
            .map(String::as_str)
    }
}

/// The effective site configuration.
///
/// Built once from static declarations and immutable afterwards; pass it by
/// reference (or behind an `Arc`) to everything that needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub locales: Vec<LocaleEntry>,
    pub default_locale: String,
    pub strategy: RoutingStrategy,

    /// `None` disables cookie and browser-language detection
    pub detection: Option<DetectionPolicy>,

    /// Directory holding the locale resource files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang_dir: Option<String>,

    #[serde(default)]
    pub fonts: FontConfig,

    pub deployment: DeploymentConfig,

    /// Capability names handed to the host build system as-is
    #[serde(default)]
    pub modules: Vec<String>,

    #[serde(default)]
    pub css: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility_date: Option<NaiveDate>,

    #[serde(default)]
    pub devtools: bool,

    #[serde(default)]
    pub head: HeadConfig,
}

impl SiteConfig {
    /// Load a site configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Parse a site configuration from its on-disk JSON form.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let file: SiteFile = serde_json::from_str(json)?;
        Ok(file.into())
    }

    /// Find a configured locale by code, ignoring case and surrounding whitespace.
    pub fn find_locale(&self, code: &str) -> Option<&LocaleEntry> {
        let code = code.trim();
        self.locales
            .iter()
            .find(|entry| entry.code.eq_ignore_ascii_case(code))
    }

    pub fn is_default(&self, code: &str) -> bool {
        self.default_locale.eq_ignore_ascii_case(code.trim())
    }

    pub fn codes(&self) -> Vec<&str> {
        self.locales.iter().map(|entry| entry.code.as_str()).collect()
    }

    /// Path of a locale's resource file under `root`.
    pub fn resource_path(&self, root: &Path, entry: &LocaleEntry) -> PathBuf {
        let dir = match &self.lang_dir {
            Some(dir) => root.join(dir),
            None => root.to_path_buf(),
        };
        dir.join(&entry.resource_file)
    }

    /// Locale resource files that do not exist under `root`.
    pub fn missing_resources(&self, root: &Path) -> Vec<PathBuf> {
        self.locales
            .iter()
            .map(|entry| self.resource_path(root, entry))
            .filter(|path| !path.is_file())
            .collect()
    }
}

// ==================== On-disk form ====================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SiteFile {
    #[serde(default)]
    compatibility_date: Option<NaiveDate>,
    #[serde(default)]
    devtools: Devtools,
    #[serde(default)]
    modules: Vec<String>,
    #[serde(default)]
    css: Vec<String>,
    #[serde(default)]
    app: AppSection,
    #[serde(default)]
    google_fonts: FontConfig,
    i18n: I18nSection,
    nitro: NitroSection,
}

#[derive(Debug, Default, Deserialize)]
struct Devtools {
    #[serde(default)]
    enabled: bool,
}

#[derive(Debug, Default, Deserialize)]
struct AppSection {
    #[serde(default)]
    head: HeadConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct I18nSection {
    locales: Vec<LocaleEntry>,
    default_locale: String,
    #[serde(default)]
    strategy: RoutingStrategy,
    #[serde(default)]
    lang_dir: Option<String>,
    #[serde(default)]
    detect_browser_language: DetectBrowserLanguage,
}

#[derive(Debug, Deserialize)]
struct NitroSection {
    preset: String,
    #[serde(default)]
    cloudflare: Option<CloudflareOptions>,
}

impl From<SiteFile> for SiteConfig {
    fn from(file: SiteFile) -> Self {
        Self {
            locales: file.i18n.locales,
            default_locale: file.i18n.default_locale,
            strategy: file.i18n.strategy,
            detection: file.i18n.detect_browser_language.into_policy(),
            lang_dir: file.i18n.lang_dir,
            fonts: file.google_fonts,
            deployment: DeploymentConfig {
                preset: file.nitro.preset,
                cloudflare: file.nitro.cloudflare,
            },
            modules: file.modules,
            css: file.css,
            compatibility_date: file.compatibility_date,
            devtools: file.devtools.enabled,
            head: file.app.head,
        }
    }
}
