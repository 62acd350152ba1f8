//! Process-wide brand identity
//!
//! [`BrandIdentity`] bundles everything a brand consumer reads: names,
//! the canonical outbound URL, and both mark definitions. It is built once
//! and only ever handed out by shared reference.
//!
//! # Usage
//!
//! ```rust
//! use brand_core::identity::brand_identity;
//! use brand_core::marks::ColorMode;
//!
//! let identity = brand_identity();
//! let mark = identity.mark(ColorMode::Monochrome).unwrap();
//! assert!(mark.inherits_color());
//! assert_eq!(identity.document_title(""), "IntellectX Chat");
//! ```

use crate::branding::{self, links};
use crate::error::{BrandError, Result};
use crate::marks::{self, ColorMode, MarkDefinition};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Immutable brand identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandIdentity {
    /// Product name
    pub product_name: String,
    /// Wordmark text
    pub wordmark: String,
    /// Chat product name
    pub chat_product_name: String,
    /// Canonical outbound URL for attribution links
    pub canonical_url: String,
    /// Monochrome mark
    pub monochrome: MarkDefinition,
    /// Flat-color mark, if this identity ships one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat: Option<MarkDefinition>,
}

/// Partial identity loaded from configuration
///
/// Absent fields keep the built-in value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandOverrides {
    /// Product name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    /// Wordmark override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wordmark: Option<String>,
    /// Chat product name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_product_name: Option<String>,
    /// Canonical URL override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    /// Set to `false` to ship without the flat-color mark
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_color: Option<bool>,
}

impl BrandIdentity {
    /// The built-in IntellectX identity
    pub fn intellectx() -> Self {
        Self {
            product_name: branding::APP_NAME.to_string(),
            wordmark: branding::WORDMARK.to_string(),
            chat_product_name: branding::CHAT_PRODUCT_NAME.to_string(),
            canonical_url: links::attribution_url(),
            monochrome: marks::monochrome_mark(branding::APP_NAME),
            flat: Some(marks::flat_mark(branding::APP_NAME)),
        }
    }

    /// Build an identity from a JSON overrides document
    pub fn from_json(json: &str) -> Result<Self> {
        let overrides: BrandOverrides = serde_json::from_str(json)?;
        Self::intellectx().with_overrides(overrides)
    }

    /// Apply overrides and validate the result
    pub fn with_overrides(mut self, overrides: BrandOverrides) -> Result<Self> {
        if let Some(name) = overrides.product_name {
            self.monochrome.title = name.clone();
            if let Some(flat) = self.flat.as_mut() {
                flat.title = name.clone();
            }
            self.product_name = name;
        }
        if let Some(wordmark) = overrides.wordmark {
            self.wordmark = wordmark;
        }
        if let Some(chat) = overrides.chat_product_name {
            self.chat_product_name = chat;
        }
        if let Some(url) = overrides.canonical_url {
            self.canonical_url = url;
        }
        if overrides.flat_color == Some(false) {
            self.flat = None;
        }

        self.validate()?;
        tracing::debug!(product = %self.product_name, "Brand identity configured");
        Ok(self)
    }

    /// Check the identity invariants
    pub fn validate(&self) -> Result<()> {
        if self.product_name.trim().is_empty() {
            return Err(BrandError::InvalidIdentity(
                "product name must not be empty".to_string(),
            ));
        }
        if self.wordmark.trim().is_empty() {
            return Err(BrandError::InvalidIdentity(
                "wordmark must not be empty".to_string(),
            ));
        }
        if !self.canonical_url.starts_with("https://") {
            return Err(BrandError::InvalidIdentity(format!(
                "canonical URL must use https: {}",
                self.canonical_url
            )));
        }
        if !self.monochrome.inherits_color() {
            return Err(BrandError::InvalidIdentity(
                "monochrome mark must not carry fixed colors".to_string(),
            ));
        }
        if let Some(flat) = &self.flat {
            if !flat.is_theme_invariant() {
                return Err(BrandError::InvalidIdentity(
                    "flat mark must only carry fixed colors".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Mark definition for a color mode
    pub fn mark(&self, mode: ColorMode) -> Result<&MarkDefinition> {
        match mode {
            ColorMode::Monochrome => Ok(&self.monochrome),
            ColorMode::FlatColor => self
                .flat
                .as_ref()
                .ok_or(BrandError::UnsupportedColorMode(mode)),
        }
    }

    /// Color modes this identity can render
    pub fn color_modes(&self) -> Vec<ColorMode> {
        let mut modes = vec![ColorMode::Monochrome];
        if self.flat.is_some() {
            modes.push(ColorMode::FlatColor);
        }
        modes
    }

    /// Document title for a route title
    ///
    /// A non-empty title becomes `"{title} · {wordmark} Chat"`. An empty one
    /// falls back to `"{product} Chat"` with no leading separator.
    pub fn document_title(&self, title: &str) -> String {
        if title.is_empty() {
            format!("{} {}", self.product_name, branding::TITLE_SUFFIX)
        } else {
            format!(
                "{}{}{} {}",
                title,
                branding::TITLE_SEPARATOR,
                self.wordmark,
                branding::TITLE_SUFFIX
            )
        }
    }
}

impl Default for BrandIdentity {
    fn default() -> Self {
        Self::intellectx()
    }
}

static IDENTITY: OnceLock<BrandIdentity> = OnceLock::new();

/// The process-wide identity, built on first use
pub fn brand_identity() -> &'static BrandIdentity {
    IDENTITY.get_or_init(BrandIdentity::intellectx)
}

/// Install a configured identity before first use
///
/// Returns the identity back if one is already installed.
pub fn install_identity(identity: BrandIdentity) -> std::result::Result<(), BrandIdentity> {
    IDENTITY.set(identity)
}
