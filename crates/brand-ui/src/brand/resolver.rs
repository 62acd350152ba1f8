//! Brand composite resolution
//!
//! Turns a [`PresentationRequest`] into an ordered list of brand elements
//! plus layout hints. Resolution is a pure table over
//! `(usage context, display type, color mode)`; nothing is rendered here.
//!
//! | Context         | Default type | Default color mode | Elements                         |
//! |-----------------|--------------|--------------------|----------------------------------|
//! | `Header`        | `Combined`   | `Monochrome`       | per type                         |
//! | `Watermark`     | `Text`       | n/a                | "Powered by", linked wordmark    |
//! | `SettingsAbout` | `Text`       | n/a                | chat product wordmark            |
//! | `Generic`       | required     | required           | per type                         |

use super::request::{BrandSize, DisplayType, PresentationRequest, UsageContext, WordmarkVariant};
use crate::components::{Alignment, Container, FlexDirection};
use crate::tokens::brand;
use brand_core::{brand_identity, BrandError, BrandIdentity, ColorMode, MarkDefinition, Result};
use serde::Serialize;

/// Attribution phrase placed before the watermark wordmark
pub const WATERMARK_PHRASE: &str = "Powered by";

// =============================================================================
// Composite Output
// =============================================================================

/// A mark selected from the identity, sized for one call site
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedMark<'a> {
    /// Vector definition owned by the identity
    pub definition: &'a MarkDefinition,
    /// Requested size
    pub size: BrandSize,
    /// Color mode the definition was selected for
    pub color_mode: ColorMode,
}

impl RenderedMark<'_> {
    /// Intrinsic aspect ratio; 1:1 for every brand mark
    pub fn aspect_ratio(&self) -> f32 {
        self.definition.aspect_ratio()
    }
}

/// Brand name as text
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordmarkText {
    /// Text to show
    pub text: String,
    /// Requested size
    pub size: BrandSize,
    /// Outbound link, if the wordmark is a hyperlink
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl WordmarkText {
    /// Plain wordmark
    pub fn new(text: impl Into<String>, size: BrandSize) -> Self {
        Self {
            text: text.into(),
            size,
            href: None,
        }
    }

    /// Make the wordmark an outbound hyperlink
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// One element of a composite, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "element", rename_all = "lowercase")]
pub enum CompositeElement<'a> {
    /// Vector mark
    Mark(RenderedMark<'a>),
    /// Brand name
    Wordmark(WordmarkText),
    /// Extra label after the wordmark (e.g. "Discover")
    Adornment {
        /// Label text
        label: String,
        /// Label size
        size: BrandSize,
    },
    /// Fixed phrase at the surrounding text size
    Phrase {
        /// Phrase text
        text: String,
    },
}

/// Layout hints for the host container
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutHints {
    /// Main axis
    pub direction: FlexDirection,
    /// Gap between elements in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    /// Cross axis alignment
    pub align: Alignment,
    /// Whether elements may wrap
    pub wrap: bool,
}

impl Default for LayoutHints {
    fn default() -> Self {
        Self {
            direction: FlexDirection::Row,
            gap: None,
            align: Alignment::Center,
            wrap: false,
        }
    }
}

impl LayoutHints {
    /// Row with a fixed gap
    pub fn row_with_gap(gap: f32) -> Self {
        Self {
            gap: Some(gap),
            ..Default::default()
        }
    }

    /// Empty container carrying these hints
    pub fn container(&self) -> Container {
        let mut container = Container {
            direction: self.direction,
            align: self.align,
            wrap: self.wrap,
            ..Default::default()
        };
        if let Some(gap) = self.gap {
            container = container.with_gap(gap);
        }
        container
    }
}

/// Result of resolving a presentation request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeOutput<'a> {
    /// Context the request was resolved for
    pub usage_context: UsageContext,
    /// Effective display type after context defaults
    pub display_type: DisplayType,
    /// Elements, left to right
    pub elements: Vec<CompositeElement<'a>>,
    /// Layout hints
    pub layout: LayoutHints,
}

impl<'a> CompositeOutput<'a> {
    /// The mark element, if any
    pub fn mark(&self) -> Option<&RenderedMark<'a>> {
        self.elements.iter().find_map(|element| match element {
            CompositeElement::Mark(mark) => Some(mark),
            _ => None,
        })
    }

    /// The wordmark element, if any
    pub fn wordmark(&self) -> Option<&WordmarkText> {
        self.elements.iter().find_map(|element| match element {
            CompositeElement::Wordmark(text) => Some(text),
            _ => None,
        })
    }

    /// The adornment label, if any
    pub fn adornment(&self) -> Option<&str> {
        self.elements.iter().find_map(|element| match element {
            CompositeElement::Adornment { label, .. } => Some(label.as_str()),
            _ => None,
        })
    }

    /// Point every linked wordmark at `href`
    pub fn retarget(&mut self, href: &str) {
        for element in &mut self.elements {
            if let CompositeElement::Wordmark(WordmarkText { href: Some(link), .. }) = element {
                *link = href.to_string();
            }
        }
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Resolves presentation requests against a brand identity
#[derive(Debug, Clone, Copy)]
pub struct BrandCompositeResolver<'a> {
    identity: &'a BrandIdentity,
}

impl Default for BrandCompositeResolver<'static> {
    fn default() -> Self {
        Self::new(brand_identity())
    }
}

impl<'a> BrandCompositeResolver<'a> {
    /// Resolver over `identity`
    pub fn new(identity: &'a BrandIdentity) -> Self {
        Self { identity }
    }

    /// Identity this resolver reads
    pub fn identity(&self) -> &'a BrandIdentity {
        self.identity
    }

    /// Resolve a request into ordered brand elements
    ///
    /// # Errors
    ///
    /// - [`BrandError::InvalidDimension`] for a non-positive size
    /// - [`BrandError::MissingPresentationParameter`] when a `Generic`
    ///   request leaves out `type` or `colorMode`
    /// - [`BrandError::UnsupportedColorMode`] when the identity has no
    ///   mark for the requested color mode
    pub fn resolve(&self, request: &PresentationRequest) -> Result<CompositeOutput<'a>> {
        request.size.validate()?;

        let output = match request.usage_context {
            UsageContext::Header => self.compose(
                request,
                request.display_type.unwrap_or(DisplayType::Combined),
                request.color_mode.unwrap_or(ColorMode::Monochrome),
            )?,
            UsageContext::Watermark => self.watermark(request.size),
            UsageContext::SettingsAbout => self.settings_about(request.size),
            UsageContext::Generic => {
                let display_type = request
                    .display_type
                    .ok_or(BrandError::MissingPresentationParameter("type"))?;
                let color_mode = request
                    .color_mode
                    .ok_or(BrandError::MissingPresentationParameter("colorMode"))?;
                self.compose(request, display_type, color_mode)?
            }
        };

        tracing::debug!(
            context = ?output.usage_context,
            display_type = ?output.display_type,
            elements = output.elements.len(),
            "Resolved brand composite"
        );
        Ok(output)
    }

    fn wordmark_text(&self, variant: WordmarkVariant) -> &'a str {
        match variant {
            WordmarkVariant::Product => self.identity.wordmark.as_str(),
            WordmarkVariant::ChatProduct => self.identity.chat_product_name.as_str(),
        }
    }

    fn compose(
        &self,
        request: &PresentationRequest,
        display_type: DisplayType,
        color_mode: ColorMode,
    ) -> Result<CompositeOutput<'a>> {
        let size = request.size;
        let text = self.wordmark_text(request.wordmark);
        let adornment = request
            .adornment_label
            .as_deref()
            .filter(|label| !label.is_empty());

        let (elements, layout) = match display_type {
            DisplayType::Text => (
                vec![CompositeElement::Wordmark(WordmarkText::new(text, size))],
                LayoutHints::default(),
            ),
            DisplayType::Mark => {
                let mut elements = vec![self.mark(size, color_mode)?];
                if let Some(label) = adornment {
                    let label_size = size.scaled(brand::COMPOSITE_TEXT_SCALE);
                    label_size.validate()?;
                    elements.push(CompositeElement::Adornment {
                        label: label.to_string(),
                        size: label_size,
                    });
                }
                (elements, LayoutHints::row_with_gap(brand::COMPOSITE_GAP))
            }
            DisplayType::Combined => {
                let text_size = size.scaled(brand::COMPOSITE_TEXT_SCALE);
                text_size.validate()?;
                let mut elements = vec![
                    self.mark(size, color_mode)?,
                    CompositeElement::Wordmark(WordmarkText::new(text, text_size)),
                ];
                if let Some(label) = adornment {
                    elements.push(CompositeElement::Adornment {
                        label: label.to_string(),
                        size: text_size,
                    });
                }
                (elements, LayoutHints::row_with_gap(brand::COMPOSITE_GAP))
            }
        };

        Ok(CompositeOutput {
            usage_context: request.usage_context,
            display_type,
            elements,
            layout,
        })
    }

    fn mark(&self, size: BrandSize, color_mode: ColorMode) -> Result<CompositeElement<'a>> {
        Ok(CompositeElement::Mark(RenderedMark {
            definition: self.identity.mark(color_mode)?,
            size,
            color_mode,
        }))
    }

    fn watermark(&self, size: BrandSize) -> CompositeOutput<'a> {
        CompositeOutput {
            usage_context: UsageContext::Watermark,
            display_type: DisplayType::Text,
            elements: vec![
                CompositeElement::Phrase {
                    text: WATERMARK_PHRASE.to_string(),
                },
                CompositeElement::Wordmark(
                    WordmarkText::new(&self.identity.wordmark, size)
                        .with_href(&self.identity.canonical_url),
                ),
            ],
            layout: LayoutHints::row_with_gap(brand::WATERMARK_GAP),
        }
    }

    fn settings_about(&self, size: BrandSize) -> CompositeOutput<'a> {
        CompositeOutput {
            usage_context: UsageContext::SettingsAbout,
            display_type: DisplayType::Text,
            elements: vec![CompositeElement::Wordmark(WordmarkText::new(
                &self.identity.chat_product_name,
                size,
            ))],
            layout: LayoutHints::default(),
        }
    }
}

/// Resolve against the process-wide identity
pub fn resolve(request: &PresentationRequest) -> Result<CompositeOutput<'static>> {
    BrandCompositeResolver::default().resolve(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::request::presets;
    use brand_core::BrandOverrides;

    fn identity() -> BrandIdentity {
        BrandIdentity::intellectx()
    }

    #[test]
    fn test_header_defaults_to_combined_monochrome() {
        let identity = identity();
        let resolver = BrandCompositeResolver::new(&identity);
        let output = resolver.resolve(&presets::market_header()).unwrap();

        assert_eq!(output.display_type, DisplayType::Combined);
        let mark = output.mark().unwrap();
        assert_eq!(mark.color_mode, ColorMode::Monochrome);
        assert_eq!(mark.size, BrandSize::Px(36.0));
        assert_eq!(output.wordmark().unwrap().text, "IntellectXChat");
        assert_eq!(output.wordmark().unwrap().size, BrandSize::Px(18.0));
        assert_eq!(output.adornment(), Some("Discover"));
        assert_eq!(output.layout.gap, Some(brand::COMPOSITE_GAP));
    }

    #[test]
    fn test_header_honours_explicit_parameters() {
        let identity = identity();
        let resolver = BrandCompositeResolver::new(&identity);
        let request = PresentationRequest::new(UsageContext::Header)
            .with_type(DisplayType::Mark)
            .with_color_mode(ColorMode::FlatColor);
        let output = resolver.resolve(&request).unwrap();

        assert_eq!(output.display_type, DisplayType::Mark);
        assert_eq!(output.elements.len(), 1);
        assert_eq!(output.mark().unwrap().color_mode, ColorMode::FlatColor);
    }

    #[test]
    fn test_combined_element_order() {
        let identity = identity();
        let resolver = BrandCompositeResolver::new(&identity);
        let output = resolver
            .resolve(&presets::chat_header(Some("Discover")))
            .unwrap();

        assert!(matches!(output.elements[0], CompositeElement::Mark(_)));
        assert!(matches!(output.elements[1], CompositeElement::Wordmark(_)));
        assert!(matches!(output.elements[2], CompositeElement::Adornment { .. }));
    }

    #[test]
    fn test_text_ignores_adornment() {
        let identity = identity();
        let resolver = BrandCompositeResolver::new(&identity);
        let request = presets::intellectx_text(BrandSize::Inherit).with_adornment("Beta");
        let output = resolver.resolve(&request).unwrap();

        assert_eq!(output.elements.len(), 1);
        assert!(output.adornment().is_none());
        assert!(output.mark().is_none());
        assert_eq!(output.wordmark().unwrap().text, "IntellectX");
    }

    #[test]
    fn test_empty_adornment_is_dropped() {
        let identity = identity();
        let resolver = BrandCompositeResolver::new(&identity);
        let output = resolver.resolve(&presets::chat_header(Some(""))).unwrap();
        assert_eq!(output.elements.len(), 2);
    }

    #[test]
    fn test_mark_with_adornment() {
        let identity = identity();
        let resolver = BrandCompositeResolver::new(&identity);
        let request = presets::logo_mono(BrandSize::Px(24.0)).with_adornment("Beta");
        let output = resolver.resolve(&request).unwrap();

        assert_eq!(output.elements.len(), 2);
        assert_eq!(output.adornment(), Some("Beta"));
        assert!(output.wordmark().is_none());
    }

    #[test]
    fn test_generic_requires_type_and_color_mode() {
        let identity = identity();
        let resolver = BrandCompositeResolver::new(&identity);

        let err = resolver
            .resolve(&PresentationRequest::new(UsageContext::Generic))
            .unwrap_err();
        assert!(matches!(err, BrandError::MissingPresentationParameter("type")));

        let err = resolver
            .resolve(&PresentationRequest::new(UsageContext::Generic).with_type(DisplayType::Mark))
            .unwrap_err();
        assert!(matches!(
            err,
            BrandError::MissingPresentationParameter("colorMode")
        ));
    }

    #[test]
    fn test_invalid_size_rejected_before_defaults() {
        let identity = identity();
        let resolver = BrandCompositeResolver::new(&identity);
        let request = PresentationRequest::new(UsageContext::Generic).with_px(-4.0);

        assert!(matches!(
            resolver.resolve(&request),
            Err(BrandError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_scaled_size_checked_at_resolution() {
        let identity = identity();
        let resolver = BrandCompositeResolver::new(&identity);
        let tiny = BrandSize::Px(f32::from_bits(1));
        assert!(tiny.validate().is_ok());

        let combined = presets::intellectx(DisplayType::Combined, tiny);
        assert!(matches!(
            resolver.resolve(&combined),
            Err(BrandError::InvalidDimension { .. })
        ));

        let adorned = presets::logo_mono(tiny).with_adornment("Beta");
        assert!(matches!(
            resolver.resolve(&adorned),
            Err(BrandError::InvalidDimension { .. })
        ));

        // Nothing is scaled for a bare mark
        assert!(resolver.resolve(&presets::logo_mono(tiny)).is_ok());
    }

    #[test]
    fn test_unsupported_color_mode() {
        let identity = BrandIdentity::intellectx()
            .with_overrides(BrandOverrides {
                flat_color: Some(false),
                ..Default::default()
            })
            .unwrap();
        let resolver = BrandCompositeResolver::new(&identity);

        let err = resolver
            .resolve(&presets::logo_flat(BrandSize::Px(24.0)))
            .unwrap_err();
        assert!(matches!(
            err,
            BrandError::UnsupportedColorMode(ColorMode::FlatColor)
        ));
    }

    #[test]
    fn test_watermark_composite() {
        let identity = identity();
        let resolver = BrandCompositeResolver::new(&identity);
        let output = resolver.resolve(&presets::watermark()).unwrap();

        assert_eq!(output.display_type, DisplayType::Text);
        assert_eq!(
            output.elements[0],
            CompositeElement::Phrase {
                text: "Powered by".to_string()
            }
        );
        let wordmark = output.wordmark().unwrap();
        assert_eq!(wordmark.text, "IntellectX");
        assert_eq!(wordmark.href.as_deref(), Some(identity.canonical_url.as_str()));
        assert_eq!(output.layout.gap, Some(brand::WATERMARK_GAP));
    }

    #[test]
    fn test_watermark_ignores_explicit_type() {
        let identity = identity();
        let resolver = BrandCompositeResolver::new(&identity);
        let output = resolver
            .resolve(&presets::watermark().with_type(DisplayType::Mark))
            .unwrap();
        assert!(output.mark().is_none());
    }

    #[test]
    fn test_retarget() {
        let identity = identity();
        let resolver = BrandCompositeResolver::new(&identity);
        let mut output = resolver.resolve(&presets::watermark()).unwrap();
        output.retarget("https://example.test/");

        assert_eq!(
            output.wordmark().unwrap().href.as_deref(),
            Some("https://example.test/")
        );
    }

    #[test]
    fn test_settings_about_has_no_mark() {
        let identity = identity();
        let resolver = BrandCompositeResolver::new(&identity);
        let output = resolver.resolve(&presets::settings_about()).unwrap();

        assert!(output.mark().is_none());
        assert_eq!(output.elements.len(), 1);
        assert_eq!(output.wordmark().unwrap().text, "IntellectXChat");
    }

    #[test]
    fn test_global_resolve() {
        let output = resolve(&presets::logo_mono(BrandSize::Inherit)).unwrap();
        assert_eq!(output.mark().unwrap().aspect_ratio(), 1.0);
    }

    #[test]
    fn test_output_serialization() {
        let identity = identity();
        let resolver = BrandCompositeResolver::new(&identity);
        let output = resolver.resolve(&presets::watermark()).unwrap();
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["usageContext"], "watermark");
        assert_eq!(json["displayType"], "text");
        assert_eq!(json["elements"][0]["element"], "phrase");
        assert_eq!(json["elements"][1]["href"], identity.canonical_url.as_str());
    }
}
