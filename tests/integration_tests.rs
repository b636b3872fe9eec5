//! Integration tests for the QR Worker site configuration
//!
//! These tests load the shipped configuration variants from `config/`, resolve
//! them, and walk them through the locale routing scenarios the front-end
//! depends on.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use qr_worker_config::{
    deploy::DeploymentPreset,
    i18n::{parse_accept_language, RoutingStrategy},
    ConfigError, ConfigResolver, LocaleDecision, SiteConfig,
};

// ==================== Test Helpers ====================

fn config_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("config")
}

fn load(name: &str) -> SiteConfig {
    let raw = SiteConfig::from_file(&config_dir().join(name)).expect("load site config");
    ConfigResolver::resolve(raw).expect("shipped config is valid")
}

fn decision(locale: &str, redirect: Option<&str>) -> LocaleDecision {
    LocaleDecision {
        locale: locale.to_string(),
        redirect: redirect.map(str::to_string),
    }
}

/// Write a site config to a temp dir, optionally with locale resource files
fn write_site(temp_dir: &TempDir, json: &str, resources: &[&str]) -> PathBuf {
    let path = temp_dir.path().join("site.json");
    std::fs::write(&path, json).expect("write site config");

    let lang_dir = temp_dir.path().join("locales");
    std::fs::create_dir_all(&lang_dir).expect("create lang dir");
    for file in resources {
        std::fs::write(lang_dir.join(file), "{}").expect("write resource");
    }
    path
}

const NO_BROWSER: &[&str] = &[];

// ==================== Shipped Config Tests ====================

#[test]
fn test_main_site_config_resolves() {
    let site = load("site.json");

    assert_eq!(site.codes(), vec!["uk", "en", "pl", "es", "it", "de"]);
    assert_eq!(site.default_locale, "uk");
    assert_eq!(site.strategy, RoutingStrategy::PrefixExceptDefault);
    assert_eq!(
        site.deployment.target(),
        Some(DeploymentPreset::CloudflareModule)
    );
    assert_eq!(
        site.fonts.stylesheet_url().as_deref(),
        Some("https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap")
    );
    assert_eq!(site.head.render_title(Some("WiFi")), "WiFi | QR Worker");
}

#[test]
fn test_no_prefix_site_config_resolves() {
    let site = load("site.no-prefix.json");

    assert_eq!(site.default_locale, "en");
    assert_eq!(site.strategy, RoutingStrategy::NoPrefix);
    assert_eq!(site.deployment.target(), Some(DeploymentPreset::Cloudflare));
    assert!(site.deployment.cloudflare.is_none());
}

#[test]
fn test_pages_site_config_resolves() {
    let site = load("site.pages.json");

    assert_eq!(site.codes(), vec!["en", "uk", "pl"]);
    assert_eq!(site.default_locale, "en");
    assert_eq!(site.strategy, RoutingStrategy::PrefixAlways);
    assert_eq!(site.deployment.preset, "cloudflare_pages");
    assert_eq!(site.fonts.stylesheet_url(), None);
    assert_eq!(site.modules, vec!["@nuxt/ui", "@nuxtjs/i18n"]);
}

#[test]
fn test_variants_differ_in_module_sets() {
    let main = load("site.json");
    let pages = load("site.pages.json");

    assert!(main.modules.iter().any(|m| m == "@nuxtjs/google-fonts"));
    assert!(!pages.modules.iter().any(|m| m == "@nuxtjs/google-fonts"));
    assert_ne!(main.modules, pages.modules);
}

#[test]
fn test_shipped_locale_resources_exist() {
    for name in ["site.json", "site.no-prefix.json", "site.pages.json"] {
        let site = load(name);
        let missing = site.missing_resources(&config_dir());
        assert!(missing.is_empty(), "{} is missing {:?}", name, missing);
    }
}

#[test]
fn test_resolved_config_is_stable() {
    let site = load("site.json");
    let again = ConfigResolver::resolve(site.clone()).expect("resolve again");
    assert_eq!(site, again);
}

#[test]
fn test_resolved_config_serializes() {
    let site = load("site.json");
    let json = serde_json::to_value(&site).expect("serialize");

    assert_eq!(json["defaultLocale"], "uk");
    assert_eq!(json["strategy"], "prefix_except_default");
    assert_eq!(json["deployment"]["preset"], "cloudflare_module");
    assert_eq!(json["locales"][0]["file"], "uk.json");
    assert_eq!(json["detection"]["redirectOn"], "root");
}

// ==================== Routing Scenario Tests ====================

#[test]
fn test_no_prefix_cookie_scenario() {
    let site = load("site.no-prefix.json");
    let result = ConfigResolver::route_locale(&site, "/", Some("uk"), NO_BROWSER);
    assert_eq!(result, decision("uk", None));
}

#[test]
fn test_prefixed_path_scenario() {
    let site = load("site.json");
    let result = ConfigResolver::route_locale(&site, "/en/foo", None, NO_BROWSER);
    assert_eq!(result, decision("en", None));
}

#[test]
fn test_root_cookie_redirect_scenario() {
    let site = load("site.json");
    let result = ConfigResolver::route_locale(&site, "/", Some("pl"), NO_BROWSER);
    assert_eq!(result, decision("pl", Some("/pl/")));
}

#[test]
fn test_root_browser_redirect_scenario() {
    let site = load("site.json");
    let result = ConfigResolver::route_locale(&site, "/", None, &["de", "it"]);
    assert_eq!(result, decision("de", Some("/de/")));
}

#[test]
fn test_unmatched_browser_locales_fall_back_to_default() {
    let site = load("site.json");
    let result = ConfigResolver::route_locale(&site, "/", None, &["fr", "ja"]);
    assert_eq!(result, decision("uk", None));

    let site = load("site.no-prefix.json");
    let result = ConfigResolver::route_locale(&site, "/", None, &["fr", "ja"]);
    assert_eq!(result, decision("en", None));
}

#[test]
fn test_prefix_always_redirects_every_unprefixed_path() {
    let site = load("site.pages.json");

    let result = ConfigResolver::route_locale(&site, "/wifi?ssid=home", Some("pl"), NO_BROWSER);
    assert_eq!(result, decision("pl", Some("/pl/wifi?ssid=home")));

    let result = ConfigResolver::route_locale(&site, "/", None, &["fr"]);
    assert_eq!(result, decision("en", Some("/en/")));

    let result = ConfigResolver::route_locale(&site, "/EN/wifi", Some("pl"), NO_BROWSER);
    assert_eq!(result, decision("en", None));
}

#[test]
fn test_accept_language_header_end_to_end() {
    let site = load("site.json");
    let browser = parse_accept_language("fr-FR,fr;q=0.9,es;q=0.8,en;q=0.7");
    let result = ConfigResolver::route_locale(&site, "/", None, &browser[..]);
    assert_eq!(result, decision("es", Some("/es/")));
}

// ==================== Validation Error Tests ====================

#[test]
fn test_invalid_default_locale_from_file() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = write_site(
        &temp_dir,
        r#"{
            "i18n": {
                "locales": [{ "code": "en", "name": "English", "file": "en.json" }],
                "defaultLocale": "uk"
            },
            "nitro": { "preset": "cloudflare" }
        }"#,
        &["en.json"],
    );

    let raw = SiteConfig::from_file(&path).expect("parse");
    let err = ConfigResolver::resolve(raw).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDefaultLocale { .. }));
}

#[test]
fn test_duplicate_locale_from_file() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = write_site(
        &temp_dir,
        r#"{
            "i18n": {
                "locales": [
                    { "code": "en", "name": "English", "file": "en.json" },
                    { "code": "en", "name": "English (again)", "file": "en2.json" }
                ],
                "defaultLocale": "en"
            },
            "nitro": { "preset": "cloudflare" }
        }"#,
        &[],
    );

    let raw = SiteConfig::from_file(&path).expect("parse");
    let err = ConfigResolver::resolve(raw).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateLocaleCode { .. }));
}

#[test]
fn test_unknown_preset_from_file() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = write_site(
        &temp_dir,
        r#"{
            "i18n": {
                "locales": [{ "code": "en", "name": "English", "file": "en.json" }],
                "defaultLocale": "en"
            },
            "nitro": { "preset": "lambda" }
        }"#,
        &[],
    );

    let raw = SiteConfig::from_file(&path).expect("parse");
    let err = ConfigResolver::resolve(raw).unwrap_err();
    assert!(err.to_string().contains("nitro.preset 'lambda'"));
}

#[test]
fn test_missing_resources_reported() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = write_site(
        &temp_dir,
        r#"{
            "i18n": {
                "locales": [
                    { "code": "en", "name": "English", "file": "en.json" },
                    { "code": "uk", "name": "Українська", "file": "uk.json" }
                ],
                "defaultLocale": "en",
                "langDir": "locales"
            },
            "nitro": { "preset": "static" }
        }"#,
        &["en.json"],
    );

    let site = ConfigResolver::resolve(SiteConfig::from_file(&path).expect("parse"))
        .expect("resolve");
    let missing = site.missing_resources(temp_dir.path());

    assert_eq!(missing, vec![temp_dir.path().join("locales").join("uk.json")]);
}
