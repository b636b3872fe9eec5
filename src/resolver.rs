//! Site configuration validation and normalization.

use crate::deploy::DeploymentPreset;
use crate::error::ConfigError;
use crate::i18n::{self, LocaleDecision};
use crate::site::SiteConfig;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// Lowest and highest weights accepted for a font family
const FONT_WEIGHT_RANGE: std::ops::RangeInclusive<u16> = 1..=1000;

static LOCALE_CODE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Resolves declared site configuration into its effective form.
pub struct ConfigResolver;

impl ConfigResolver {
    /// Validate and normalize a site configuration.
    ///
    /// Normalization trims locale codes, the default locale, the cookie key
    /// and the preset; rewrites the default locale and preset to their
    /// canonical spelling; and drops repeated module names. Resolving an
    /// already resolved configuration returns it unchanged.
    ///
    /// # Errors
    /// Returns the first violated invariant as a `ConfigError` naming the
    /// offending field.
    pub fn resolve(raw: SiteConfig) -> Result<SiteConfig, ConfigError> {
        let mut config = raw;

        if config.locales.is_empty() {
            return Err(ConfigError::NoLocales);
        }

        let mut seen = HashSet::new();
        for entry in &mut config.locales {
            entry.code = entry.code.trim().to_string();
            if !Self::is_valid_locale_code(&entry.code) {
                return Err(ConfigError::InvalidLocaleCode {
                    code: entry.code.clone(),
                });
            }
            if !seen.insert(entry.code.to_ascii_lowercase()) {
                return Err(ConfigError::DuplicateLocaleCode {
                    code: entry.code.clone(),
                });
            }
        }

        let default_locale = match config.find_locale(&config.default_locale) {
            Some(entry) => entry.code.clone(),
            None => {
                return Err(ConfigError::InvalidDefaultLocale {
                    code: config.default_locale.trim().to_string(),
                })
            }
        };
        config.default_locale = default_locale;

        if let Some(policy) = &mut config.detection {
            policy.cookie_key = policy.cookie_key.trim().to_string();
            if policy.use_cookie && policy.cookie_key.is_empty() {
                return Err(ConfigError::EmptyCookieKey);
            }
        }

        for (family, weights) in &config.fonts.families {
            if weights.is_empty() {
                return Err(ConfigError::EmptyFontWeights {
                    family: family.clone(),
                });
            }
            if let Some(weight) = weights.iter().find(|w| !FONT_WEIGHT_RANGE.contains(*w)) {
                return Err(ConfigError::InvalidFontWeight {
                    family: family.clone(),
                    weight: *weight,
                });
            }
        }

        let preset: DeploymentPreset = config.deployment.preset.parse()?;
        config.deployment.preset = preset.as_str().to_string();
        if config.deployment.cloudflare.is_some() && !preset.is_cloudflare() {
            warn!("{}", Self::inert_cloudflare_note(preset));
        }

        let mut module_names = HashSet::new();
        let declared = config.modules.len();
        config
            .modules
            .retain(|module| module_names.insert(module.clone()));
        if config.modules.len() != declared {
            debug!(
                "Dropped {} repeated module name(s)",
                declared - config.modules.len()
            );
        }

        info!(
            "Resolved site configuration: {} locale(s), default '{}', strategy {:?}, preset {}",
            config.locales.len(),
            config.default_locale,
            config.strategy,
            preset
        );

        Ok(config)
    }

    /// Decide the locale for a request against a resolved configuration.
    ///
    /// Never fails: anything that cannot be matched degrades to the default
    /// locale.
    pub fn route_locale<S: AsRef<str>>(
        config: &SiteConfig,
        request_path: &str,
        cookie_value: Option<&str>,
        browser_locales: &[S],
    ) -> LocaleDecision {
        i18n::route_locale(config, request_path, cookie_value, browser_locales)
    }

    /// The options stay in the resolved output; only the preset ignores them.
    fn inert_cloudflare_note(preset: DeploymentPreset) -> String {
        format!(
            "nitro.cloudflare options are kept but have no effect on preset '{}'",
            preset
        )
    }

    fn is_valid_locale_code(code: &str) -> bool {
        let regex = LOCALE_CODE_REGEX.get_or_init(|| {
            Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("locale code pattern")
        });
        regex.is_match(code)
    }
}
