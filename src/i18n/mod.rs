//! Internationalization (i18n): locale declarations and request routing.
//!
//! # Architecture
//!
//! - `locale`: Locale entries, routing strategy and detection policy types
//! - `negotiate`: `Accept-Language` parsing and browser-locale matching
//! - `router`: Per-request locale decision and locale-aware path building
//!
//! # Example
//!
//! ```rust,ignore
//! use qr_worker_config::i18n::{parse_accept_language, route_locale};
//!
//! let browser = parse_accept_language("de-DE,de;q=0.9,en;q=0.8");
//! let decision = route_locale(&site, "/", cookie.as_deref(), &browser);
//! if let Some(location) = decision.redirect {
//!     // respond with 302 Location: location
//! }
//! ```

mod locale;
mod negotiate;
mod router;

pub use locale::{DetectBrowserLanguage, DetectionPolicy, LocaleEntry, RedirectOn, RoutingStrategy};
pub use negotiate::{negotiate, parse_accept_language};
pub use router::{localize_path, route_locale, strip_locale_prefix, LocaleDecision};
