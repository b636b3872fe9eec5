//! Google Fonts declarations.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

const GOOGLE_FONTS_CSS2: &str = "https://fonts.googleapis.com/css2";

/// CSS `font-display` policy requested from Google Fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontDisplay {
    Auto,
    Block,
    #[default]
    Swap,
    Fallback,
    Optional,
}

impl FontDisplay {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontDisplay::Auto => "auto",
            FontDisplay::Block => "block",
            FontDisplay::Swap => "swap",
            FontDisplay::Fallback => "fallback",
            FontDisplay::Optional => "optional",
        }
    }
}

/// The `googleFonts` section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontConfig {
    /// Family name to the weights loaded for it
    pub families: BTreeMap<String, BTreeSet<u16>>,

    pub display: FontDisplay,

    /// Whether the stylesheet is preloaded in the document head
    pub preload: bool,
}

impl FontConfig {
    /// Builds the css2 stylesheet URL covering every family.
    ///
    /// Returns `None` when no families are declared.
    pub fn stylesheet_url(&self) -> Option<String> {
        if self.families.is_empty() {
            return None;
        }

        let families = self
            .families
            .iter()
            .map(|(family, weights)| {
                let name = family.trim().replace(' ', "+");
                if weights.is_empty() {
                    format!("family={}", name)
                } else {
                    let weights = weights
                        .iter()
                        .map(|w| w.to_string())
                        .collect::<Vec<_>>()
                        .join(";");
                    format!("family={}:wght@{}", name, weights)
                }
            })
            .collect::<Vec<_>>()
            .join("&");

        Some(format!(
            "{}?{}&display={}",
            GOOGLE_FONTS_CSS2,
            families,
            self.display.as_str()
        ))
    }
}
