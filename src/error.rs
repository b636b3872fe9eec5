use std::path::PathBuf;

/// Errors raised while loading or validating a site configuration.
///
/// Every variant names the offending configuration field so the build can
/// report it to the operator before aborting.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("i18n.locales must contain at least one locale")]
    NoLocales,

    #[error("invalid locale code '{code}' in i18n.locales")]
    InvalidLocaleCode { code: String },

    #[error("duplicate locale code '{code}' in i18n.locales")]
    DuplicateLocaleCode { code: String },

    #[error("i18n.defaultLocale '{code}' is not one of the configured locales")]
    InvalidDefaultLocale { code: String },

    #[error("i18n.detectBrowserLanguage.cookieKey must not be empty when useCookie is enabled")]
    EmptyCookieKey,

    #[error("googleFonts.families.{family} must list at least one weight")]
    EmptyFontWeights { family: String },

    #[error("googleFonts.families.{family} has invalid weight {weight} (expected 1-1000)")]
    InvalidFontWeight { family: String, weight: u16 },

    #[error("nitro.preset '{preset}' is not a known deployment target")]
    UnknownDeploymentPreset { preset: String },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse site configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
