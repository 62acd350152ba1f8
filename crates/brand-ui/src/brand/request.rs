//! Presentation requests
//!
//! A [`PresentationRequest`] is what a call site asks the resolver for.
//! Only the usage context is mandatory; everything else may be left to the
//! context's defaults.

use crate::components::Dimension;
use crate::tokens::brand;
use brand_core::{BrandError, ColorMode, Result};
use serde::{Deserialize, Serialize};

/// Which parts of the brand to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayType {
    /// Icon only
    Mark,
    /// Wordmark only
    Text,
    /// Icon, wordmark, then the optional adornment
    Combined,
}

/// Where the brand is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsageContext {
    /// Chat and market header bars
    Header,
    /// "Powered by" attribution footer
    Watermark,
    /// Settings About page
    SettingsAbout,
    /// Anything else; every parameter must be explicit
    #[default]
    #[serde(other)]
    Generic,
}

impl UsageContext {
    /// Parse a context name, falling back to [`UsageContext::Generic`]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "header" => UsageContext::Header,
            "watermark" => UsageContext::Watermark,
            "settings-about" | "settings_about" | "about" => UsageContext::SettingsAbout,
            "generic" => UsageContext::Generic,
            other => {
                tracing::warn!(context = other, "Unknown usage context, using generic");
                UsageContext::Generic
            }
        }
    }
}

/// Which wordmark text to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordmarkVariant {
    /// Product name
    #[default]
    Product,
    /// Chat product name
    ChatProduct,
}

/// Requested size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum BrandSize {
    /// Pixels
    Px(f32),
    /// Multiple of the current font size
    Em(f32),
    /// Current text size, i.e. `1em`
    #[default]
    Inherit,
}

impl BrandSize {
    /// Reject zero, negative, and non-finite sizes
    pub fn validate(&self) -> Result<()> {
        match *self {
            BrandSize::Px(size) | BrandSize::Em(size) if !(size.is_finite() && size > 0.0) => {
                Err(BrandError::InvalidDimension { size })
            }
            _ => Ok(()),
        }
    }

    /// Scale by a factor; `Inherit` scales as `1em`
    pub fn scaled(&self, factor: f32) -> Self {
        match *self {
            BrandSize::Px(size) => BrandSize::Px(size * factor),
            BrandSize::Em(size) => BrandSize::Em(size * factor),
            BrandSize::Inherit => BrandSize::Em(factor),
        }
    }

    /// Layout dimension
    pub fn to_dimension(&self) -> Dimension {
        match *self {
            BrandSize::Px(size) => Dimension::Px(size),
            BrandSize::Em(size) => Dimension::Em(size),
            BrandSize::Inherit => Dimension::Em(1.0),
        }
    }
}

/// A call site's request for brand output
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationRequest {
    /// Display type; defaulted by some contexts
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub display_type: Option<DisplayType>,
    /// Size
    #[serde(default)]
    pub size: BrandSize,
    /// Color mode; defaulted by some contexts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<ColorMode>,
    /// Extra label after the wordmark, for `Mark` and `Combined` only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adornment_label: Option<String>,
    /// Wordmark text
    #[serde(default)]
    pub wordmark: WordmarkVariant,
    /// Placement
    #[serde(default)]
    pub usage_context: UsageContext,
}

impl PresentationRequest {
    /// Empty request for a context
    pub fn new(usage_context: UsageContext) -> Self {
        Self {
            usage_context,
            ..Default::default()
        }
    }

    /// Set display type
    pub fn with_type(mut self, display_type: DisplayType) -> Self {
        self.display_type = Some(display_type);
        self
    }

    /// Set size
    pub fn with_size(mut self, size: BrandSize) -> Self {
        self.size = size;
        self
    }

    /// Set size in pixels
    pub fn with_px(self, size: f32) -> Self {
        self.with_size(BrandSize::Px(size))
    }

    /// Set color mode
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = Some(mode);
        self
    }

    /// Set adornment label
    pub fn with_adornment(mut self, label: impl Into<String>) -> Self {
        self.adornment_label = Some(label.into());
        self
    }

    /// Set wordmark variant
    pub fn with_wordmark(mut self, wordmark: WordmarkVariant) -> Self {
        self.wordmark = wordmark;
        self
    }
}

/// Named presets matching the brand component family
pub mod presets {
    use super::*;

    /// Monochrome mark
    pub fn logo_mono(size: BrandSize) -> PresentationRequest {
        PresentationRequest::new(UsageContext::Generic)
            .with_type(DisplayType::Mark)
            .with_color_mode(ColorMode::Monochrome)
            .with_size(size)
    }

    /// Flat-color mark
    pub fn logo_flat(size: BrandSize) -> PresentationRequest {
        PresentationRequest::new(UsageContext::Generic)
            .with_type(DisplayType::Mark)
            .with_color_mode(ColorMode::FlatColor)
            .with_size(size)
    }

    /// Product wordmark (`IntellectXText`)
    pub fn intellectx_text(size: BrandSize) -> PresentationRequest {
        PresentationRequest::new(UsageContext::Generic)
            .with_type(DisplayType::Text)
            .with_color_mode(ColorMode::Monochrome)
            .with_size(size)
    }

    /// Chat product wordmark (`IntellectXChatText`)
    pub fn intellectx_chat_text(size: BrandSize) -> PresentationRequest {
        intellectx_text(size).with_wordmark(WordmarkVariant::ChatProduct)
    }

    /// Product brand in any display type (`IntellectX`)
    pub fn intellectx(display_type: DisplayType, size: BrandSize) -> PresentationRequest {
        PresentationRequest::new(UsageContext::Generic)
            .with_type(display_type)
            .with_color_mode(ColorMode::Monochrome)
            .with_size(size)
    }

    /// Chat product brand in any display type (`IntellectXChat`)
    pub fn intellectx_chat(display_type: DisplayType, size: BrandSize) -> PresentationRequest {
        intellectx(display_type, size).with_wordmark(WordmarkVariant::ChatProduct)
    }

    /// Header brand: mark, chat wordmark, then `extra` if given
    pub fn chat_header(extra: Option<&str>) -> PresentationRequest {
        let request = PresentationRequest::new(UsageContext::Header)
            .with_px(brand::HEADER_SIZE)
            .with_wordmark(WordmarkVariant::ChatProduct);
        match extra {
            Some(label) => request.with_adornment(label),
            None => request,
        }
    }

    /// Discover (market) page header
    pub fn market_header() -> PresentationRequest {
        chat_header(Some("Discover"))
    }

    /// Welcome layout wordmark
    pub fn welcome_wordmark() -> PresentationRequest {
        intellectx_text(BrandSize::Px(brand::WELCOME_WORDMARK_SIZE))
    }

    /// Attribution footer
    pub fn watermark() -> PresentationRequest {
        PresentationRequest::new(UsageContext::Watermark)
            .with_px(brand::WATERMARK_WORDMARK_SIZE)
    }

    /// Settings About heading
    pub fn settings_about() -> PresentationRequest {
        PresentationRequest::new(UsageContext::SettingsAbout)
            .with_px(brand::WELCOME_WORDMARK_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_validation() {
        assert!(BrandSize::Px(36.0).validate().is_ok());
        assert!(BrandSize::Em(0.5).validate().is_ok());
        assert!(BrandSize::Inherit.validate().is_ok());

        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                BrandSize::Px(bad).validate(),
                Err(BrandError::InvalidDimension { .. })
            ));
        }
        assert!(BrandSize::Em(0.0).validate().is_err());
    }

    #[test]
    fn test_size_scaling() {
        assert_eq!(BrandSize::Px(36.0).scaled(0.5), BrandSize::Px(18.0));
        assert_eq!(BrandSize::Inherit.scaled(0.5), BrandSize::Em(0.5));
        assert_eq!(BrandSize::Inherit.to_dimension(), Dimension::Em(1.0));
    }

    #[test]
    fn test_usage_context_fallback() {
        assert_eq!(UsageContext::from_name("Header"), UsageContext::Header);
        assert_eq!(
            UsageContext::from_name("settings-about"),
            UsageContext::SettingsAbout
        );
        assert_eq!(UsageContext::from_name("sidebar"), UsageContext::Generic);

        let ctx: UsageContext = serde_json::from_str("\"sidebar\"").unwrap();
        assert_eq!(ctx, UsageContext::Generic);
    }

    #[test]
    fn test_request_from_json() {
        let request: PresentationRequest = serde_json::from_str(
            r#"{"type": "combined", "size": {"unit": "px", "value": 36}, "usageContext": "header", "adornmentLabel": "Discover"}"#,
        )
        .unwrap();

        assert_eq!(request.display_type, Some(DisplayType::Combined));
        assert_eq!(request.size, BrandSize::Px(36.0));
        assert_eq!(request.usage_context, UsageContext::Header);
        assert_eq!(request.adornment_label.as_deref(), Some("Discover"));
        assert_eq!(request.color_mode, None);
    }

    #[test]
    fn test_presets() {
        let header = presets::market_header();
        assert_eq!(header.usage_context, UsageContext::Header);
        assert_eq!(header.size, BrandSize::Px(36.0));
        assert_eq!(header.display_type, None);
        assert_eq!(header.adornment_label.as_deref(), Some("Discover"));

        let flat = presets::logo_flat(BrandSize::Inherit);
        assert_eq!(flat.color_mode, Some(ColorMode::FlatColor));
        assert_eq!(flat.display_type, Some(DisplayType::Mark));

        assert_eq!(
            presets::intellectx_chat_text(BrandSize::Inherit).wordmark,
            WordmarkVariant::ChatProduct
        );
    }
}
