//! Locale declarations: the entries a site is translated into and the
//! policies that decide how the active locale shows up in URLs.

use serde::{Deserialize, Serialize};

/// A locale the site is translated into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleEntry {
    /// Short language tag (e.g., "en", "uk"), unique across the site
    pub code: String,

    /// Name shown in the language switcher, in the locale's own language
    #[serde(rename = "name")]
    pub display_name: String,

    /// Localization resource, relative to `langDir`
    #[serde(rename = "file")]
    pub resource_file: String,
}

impl LocaleEntry {
    pub fn new(code: &str, display_name: &str, resource_file: &str) -> Self {
        Self {
            code: code.to_string(),
            display_name: display_name.to_string(),
            resource_file: resource_file.to_string(),
        }
    }
}

/// Whether, and for which locales, routes carry a `/<code>` path prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingStrategy {
    /// Every locale except the default one is prefixed
    #[default]
    PrefixExceptDefault,

    /// No locale is ever prefixed; the locale comes from detection only
    NoPrefix,

    /// Every locale, including the default, is prefixed
    #[serde(rename = "prefix")]
    PrefixAlways,
}

/// Which requests trigger browser-language detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RedirectOn {
    /// Only the site root (`/`)
    #[default]
    #[serde(rename = "root")]
    Root,

    /// Every route without a locale prefix
    #[serde(rename = "all")]
    AllRoutes,
}

/// Browser-language detection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetectionPolicy {
    /// Whether a previously chosen locale is remembered in a cookie
    pub use_cookie: bool,

    /// Name of the cookie holding the chosen locale
    pub cookie_key: String,

    pub redirect_on: RedirectOn,
}

impl Default for DetectionPolicy {
    fn default() -> Self {
        Self {
            use_cookie: true,
            cookie_key: "i18n_redirected".to_string(),
            redirect_on: RedirectOn::Root,
        }
    }
}

/// `detectBrowserLanguage` accepts either a boolean toggle or a policy object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DetectBrowserLanguage {
    Toggle(bool),
    Policy(DetectionPolicy),
}

impl Default for DetectBrowserLanguage {
    fn default() -> Self {
        DetectBrowserLanguage::Toggle(true)
    }
}

impl DetectBrowserLanguage {
    /// The effective policy; `false` disables detection entirely.
    pub fn into_policy(self) -> Option<DetectionPolicy> {
        match self {
            DetectBrowserLanguage::Toggle(true) => Some(DetectionPolicy::default()),
            DetectBrowserLanguage::Toggle(false) => None,
            DetectBrowserLanguage::Policy(policy) => Some(policy),
        }
    }
}
