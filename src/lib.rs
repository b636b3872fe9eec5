//! Site configuration resolution for the QR Worker front-end.
//!
//! Loads the declarative site configuration (locales, routing strategy,
//! fonts, deployment preset), validates it once at build time, and decides
//! the locale for each incoming request.

pub mod config;
pub mod deploy;
pub mod error;
pub mod fonts;
pub mod i18n;
pub mod resolver;
pub mod server;
pub mod site;

pub use error::ConfigError;
pub use i18n::LocaleDecision;
pub use resolver::ConfigResolver;
pub use site::SiteConfig;
