//! "Powered by" attribution footer

use super::request::presets;
use super::resolver::BrandCompositeResolver;
use crate::components::{Alignment, Container, Dimension, DrawableNode, Paint};
use crate::theme::ColorToken;
use crate::tokens::brand;
use brand_core::{brand_identity, BrandIdentity, Result};

/// Attribution footer: `Powered by <wordmark>`, with the wordmark linking
/// out in a new browsing context
#[derive(Debug, Clone, Copy)]
pub struct BrandWatermark<'a> {
    resolver: BrandCompositeResolver<'a>,
}

impl Default for BrandWatermark<'static> {
    fn default() -> Self {
        Self::new(brand_identity())
    }
}

impl<'a> BrandWatermark<'a> {
    /// Watermark for `identity`
    pub fn new(identity: &'a BrandIdentity) -> Self {
        Self {
            resolver: BrandCompositeResolver::new(identity),
        }
    }

    /// Render with the wordmark linking to `link_target`
    pub fn render(&self, link_target: &str) -> Result<DrawableNode> {
        let mut output = self.resolver.resolve(&presets::watermark())?;
        output.retarget(link_target);

        let row = Container::row()
            .with_align(Alignment::Center)
            .with_gap(brand::WATERMARK_GAP)
            .flex_none()
            .with_color(Paint::Token(ColorToken::TextDescription))
            .with_font_size(Dimension::px(brand::WATERMARK_FONT_SIZE))
            .with_children(output.render_elements()?);

        Ok(DrawableNode::Container(row))
    }

    /// Render linking to the identity's canonical URL
    pub fn render_canonical(&self) -> Result<DrawableNode> {
        self.render(&self.resolver.identity().canonical_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::LinkTarget;

    #[test]
    fn test_watermark_row() {
        let identity = BrandIdentity::intellectx();
        let node = BrandWatermark::new(&identity)
            .render("https://intellectx.app/?ref=footer")
            .unwrap();

        let DrawableNode::Container(row) = &node else {
            panic!("expected container, got {:?}", node);
        };
        assert_eq!(row.align, Alignment::Center);
        assert!(!row.wrap);
        assert!(row.flex_none);
        assert_eq!(row.gap, Some(4.0));
        assert_eq!(row.color, Some(Paint::Token(ColorToken::TextDescription)));
        assert_eq!(row.font_size, Some(Dimension::px(12.0)));
        assert_eq!(node.text_content(), "Powered by IntellectX");
    }

    #[test]
    fn test_watermark_link() {
        let identity = BrandIdentity::intellectx();
        let node = BrandWatermark::new(&identity)
            .render("https://example.test/")
            .unwrap();

        let links = node.links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "https://example.test/");
        assert_eq!(links[0].target, LinkTarget::NewContext);
        assert_eq!(links[0].children[0].text_content(), "IntellectX");
    }

    #[test]
    fn test_canonical_watermark() {
        let node = BrandWatermark::default().render_canonical().unwrap();
        let markup = node.to_markup();

        assert!(markup.contains("utm_source=intellectx_chat"));
        assert!(markup.contains(r#"target="_blank" rel="noopener noreferrer""#));
        assert!(markup.contains("color: var(--color-text-description);"));
    }
}
