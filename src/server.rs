//! Local preview server.
//!
//! Applies locale routing decisions to real HTTP requests: redirects are sent
//! as `302 Found`, everything else answers with the chosen locale as JSON.
//! When the cookie policy is on, the chosen locale is persisted in the
//! configured cookie.

use crate::i18n::{parse_accept_language, route_locale};
use crate::site::SiteConfig;
use axum::extract::State;
use axum::http::header::{ACCEPT_LANGUAGE, LOCATION};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteConfig>,
}

/// Router answering every path with its locale decision.
pub fn router(site: Arc<SiteConfig>) -> Router {
    Router::new()
        .fallback(locale_handler)
        .with_state(AppState { site })
        .layer(TraceLayer::new_for_http())
}

async fn locale_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    uri: Uri,
    headers: HeaderMap,
) -> (CookieJar, Response) {
    locale_response(&state.site, &uri, &headers, jar)
}

/// Route one request and turn the decision into a response.
///
/// The returned jar carries the locale cookie when the cookie policy is on.
pub fn locale_response(
    site: &SiteConfig,
    uri: &Uri,
    headers: &HeaderMap,
    jar: CookieJar,
) -> (CookieJar, Response) {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    let cookie_key = site
        .detection
        .as_ref()
        .filter(|policy| policy.use_cookie)
        .map(|policy| policy.cookie_key.clone());

    let cookie = cookie_key
        .as_deref()
        .and_then(|key| jar.get(key))
        .map(|c| c.value().to_string());

    let browser_locales = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(parse_accept_language)
        .unwrap_or_default();

    let decision = route_locale(site, path_and_query, cookie.as_deref(), &browser_locales[..]);

    let response = match &decision.redirect {
        Some(location) => (StatusCode::FOUND, [(LOCATION, location.clone())]).into_response(),
        None => Json(json!({
            "locale": decision.locale,
            "path": uri.path(),
            "title": site.head.render_title(None),
        }))
        .into_response(),
    };

    let jar = match cookie_key {
        Some(key) => jar.add(
            Cookie::build((key, decision.locale))
                .path("/")
                .same_site(SameSite::Lax),
        ),
        None => jar,
    };

    (jar, response)
}
