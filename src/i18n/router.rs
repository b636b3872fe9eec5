//! Per-request locale routing.
//!
//! Given a resolved `SiteConfig`, decide which locale serves a request and
//! whether the client should be redirected first. Routing is total: every
//! input yields a configured locale, falling back to the default one.

use crate::i18n::{negotiate, LocaleEntry, RedirectOn, RoutingStrategy};
use crate::site::SiteConfig;
use serde::Serialize;
use tracing::debug;

/// Outcome of routing a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleDecision {
    /// Code of the locale to serve
    pub locale: String,

    /// Location to redirect to before serving, if any
    pub redirect: Option<String>,
}

impl LocaleDecision {
    fn serve(code: &str) -> Self {
        Self {
            locale: code.to_string(),
            redirect: None,
        }
    }

    fn redirect(code: &str, location: String) -> Self {
        Self {
            locale: code.to_string(),
            redirect: Some(location),
        }
    }
}

/// Decide the locale for a request.
///
/// # Arguments
/// * `config` - Resolved site configuration
/// * `request_path` - Request path, optionally with query string
/// * `cookie_value` - Value of the locale cookie, if the client sent one
/// * `browser_locales` - Client language preferences, most preferred first
pub fn route_locale<S: AsRef<str>>(
    config: &SiteConfig,
    request_path: &str,
    cookie_value: Option<&str>,
    browser_locales: &[S],
) -> LocaleDecision {
    let decision = match config.strategy {
        RoutingStrategy::NoPrefix => {
            let code = detect(config, cookie_value, browser_locales)
                .map(|entry| entry.code.as_str())
                .unwrap_or(config.default_locale.as_str());
            LocaleDecision::serve(code)
        }
        RoutingStrategy::PrefixExceptDefault => {
            route_prefix_except_default(config, request_path, cookie_value, browser_locales)
        }
        RoutingStrategy::PrefixAlways => {
            route_prefix_always(config, request_path, cookie_value, browser_locales)
        }
    };

    debug!(
        "Routed {} to locale {} (redirect: {:?})",
        request_path, decision.locale, decision.redirect
    );
    decision
}

fn route_prefix_except_default<S: AsRef<str>>(
    config: &SiteConfig,
    request_path: &str,
    cookie_value: Option<&str>,
    browser_locales: &[S],
) -> LocaleDecision {
    let (path, _) = split_query(request_path);
    let path = if path.is_empty() { "/" } else { path };

    match strip_locale_prefix(config, path) {
        // Path prefix wins over cookie and browser preferences
        (Some(entry), _) if !config.is_default(&entry.code) => LocaleDecision::serve(&entry.code),
        // The default locale is never prefixed; point at the canonical path
        (Some(_), _) => LocaleDecision::redirect(
            &config.default_locale,
            localize_path(config, &config.default_locale, request_path),
        ),
        (None, _) => {
            let should_detect = config
                .detection
                .as_ref()
                .map(|policy| match policy.redirect_on {
                    RedirectOn::Root => path == "/",
                    RedirectOn::AllRoutes => true,
                })
                .unwrap_or(false);

            if should_detect {
                if let Some(entry) = detect(config, cookie_value, browser_locales) {
                    if !config.is_default(&entry.code) {
                        return LocaleDecision::redirect(
                            &entry.code,
                            localize_path(config, &entry.code, request_path),
                        );
                    }
                }
            }

            LocaleDecision::serve(&config.default_locale)
        }
    }
}

fn route_prefix_always<S: AsRef<str>>(
    config: &SiteConfig,
    request_path: &str,
    cookie_value: Option<&str>,
    browser_locales: &[S],
) -> LocaleDecision {
    let (path, _) = split_query(request_path);

    match strip_locale_prefix(config, path) {
        (Some(entry), _) => LocaleDecision::serve(&entry.code),
        (None, _) => {
            let code = detect(config, cookie_value, browser_locales)
                .map(|entry| entry.code.as_str())
                .unwrap_or(config.default_locale.as_str());
            LocaleDecision::redirect(code, localize_path(config, code, request_path))
        }
    }
}

/// Cookie first, then browser negotiation; `None` when detection is off or
/// nothing matches.
fn detect<'a, S: AsRef<str>>(
    config: &'a SiteConfig,
    cookie_value: Option<&str>,
    browser_locales: &[S],
) -> Option<&'a LocaleEntry> {
    let policy = config.detection.as_ref()?;

    if policy.use_cookie {
        if let Some(entry) = cookie_value.and_then(|value| config.find_locale(value)) {
            return Some(entry);
        }
    }

    negotiate(&config.locales, browser_locales)
}

/// Split a leading locale segment off `path`.
///
/// Returns the matched locale (if the first segment is a configured code,
/// compared ignoring ASCII case) and the remaining path, which always starts
/// with `/`.
pub fn strip_locale_prefix<'a, 'p>(
    config: &'a SiteConfig,
    path: &'p str,
) -> (Option<&'a LocaleEntry>, &'p str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (segment, rest) = match trimmed.find('/') {
        Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
        None => (trimmed, ""),
    };

    match config.locales.iter().find(|entry| entry.code.eq_ignore_ascii_case(segment)) {
        Some(entry) if rest.is_empty() => (Some(entry), "/"),
        Some(entry) => (Some(entry), rest),
        None if path.is_empty() => (None, "/"),
        None => (None, path),
    }
}

/// The path serving `path`'s page in locale `code` under the site's strategy.
///
/// Any existing locale prefix is replaced. The query string is preserved.
pub fn localize_path(config: &SiteConfig, code: &str, path: &str) -> String {
    if config.strategy == RoutingStrategy::NoPrefix {
        return path.to_string();
    }

    let (path, query) = split_query(path);
    let (_, rest) = strip_locale_prefix(config, path);

    let prefixed = config.strategy == RoutingStrategy::PrefixAlways || !config.is_default(code);
    if !prefixed {
        return format!("{}{}", rest, query);
    }

    let code = config
        .find_locale(code)
        .map(|entry| entry.code.as_str())
        .unwrap_or(code);
    if rest == "/" {
        format!("/{}/{}", code, query)
    } else {
        format!("/{}{}{}", code, rest, query)
    }
}

fn split_query(path: &str) -> (&str, &str) {
    match path.find(['?', '#']) {
        Some(idx) => (&path[..idx], &path[idx..]),
        None => (path, ""),
    }
}
