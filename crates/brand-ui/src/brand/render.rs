//! Mark and wordmark renderers
//!
//! Both renderers are pure: same input, same [`DrawableNode`]. The only
//! failure is a size that is not positive.
//!
//! A monochrome mark never names a color. The root `<svg>` fill is
//! `currentColor` and each shape only varies its opacity, so the mark
//! follows whatever text color its container has, theme switches included.
//! A flat-color mark writes its palette on every shape and ignores the
//! theme.

use super::request::BrandSize;
use super::resolver::{CompositeElement, CompositeOutput, RenderedMark, WordmarkText};
use crate::components::{Dimension, DrawableNode, Link, Paint, Svg, SvgShape, Text};
use crate::theme::ColorToken;
use crate::typography::TextStyle;
use brand_core::{BrandError, ColorMode, Result, Tone};

/// Renders a [`RenderedMark`] as an SVG node
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgMarkRenderer;

impl SvgMarkRenderer {
    /// Render the mark at its requested size
    pub fn render(&self, mark: &RenderedMark<'_>) -> Result<DrawableNode> {
        mark.size.validate()?;
        let definition = mark.definition;

        let root_fill = match mark.color_mode {
            ColorMode::Monochrome if definition.inherits_color() => Paint::CurrentColor,
            ColorMode::FlatColor if definition.is_theme_invariant() => Paint::None,
            mode => return Err(BrandError::UnsupportedColorMode(mode)),
        };

        let svg = definition.shapes.iter().fold(
            Svg::square(definition.view_box, mark.size.to_dimension())
                .with_title(&definition.title)
                .with_fill(root_fill),
            |svg, shape| {
                let (fill, opacity) = match &shape.tone {
                    Tone::Inherit { opacity } => {
                        (Paint::CurrentColor, (*opacity < 1.0).then_some(*opacity))
                    }
                    Tone::Fixed { color } => (Paint::Fixed(color.clone()), None),
                };
                svg.with_shape(SvgShape {
                    geometry: shape.geometry.clone(),
                    fill,
                    opacity,
                })
            },
        );

        tracing::trace!(
            color_mode = %mark.color_mode,
            shapes = svg.shapes.len(),
            "Rendered brand mark"
        );
        Ok(DrawableNode::Svg(svg))
    }
}

/// Renders a [`WordmarkText`] as bold text, linked when it has an href
#[derive(Debug, Clone, Copy, Default)]
pub struct WordmarkRenderer;

impl WordmarkRenderer {
    /// Render the wordmark
    pub fn render(&self, wordmark: &WordmarkText) -> Result<DrawableNode> {
        wordmark.size.validate()?;
        let size = wordmark.size.to_dimension();
        let text = DrawableNode::Text(
            Text::new(wordmark.text.as_str(), TextStyle::wordmark(size.clone())).strong(),
        );

        Ok(match &wordmark.href {
            Some(href) => DrawableNode::Link(
                Link::new(href.as_str())
                    .external()
                    .with_hover_color(Paint::Token(ColorToken::Link))
                    .with_height(size)
                    .with_child(text),
            ),
            None => text,
        })
    }
}

fn label(text: &str, size: BrandSize) -> Result<DrawableNode> {
    size.validate()?;
    Ok(DrawableNode::Text(Text::new(
        text,
        TextStyle::label(size.to_dimension()),
    )))
}

impl CompositeElement<'_> {
    /// Render this element on its own
    pub fn render(&self) -> Result<DrawableNode> {
        match self {
            CompositeElement::Mark(mark) => SvgMarkRenderer.render(mark),
            CompositeElement::Wordmark(wordmark) => WordmarkRenderer.render(wordmark),
            CompositeElement::Adornment { label: text, size } => label(text, *size),
            CompositeElement::Phrase { text } => Ok(DrawableNode::Text(Text::new(
                text.as_str(),
                TextStyle::label(Dimension::em(1.0)),
            ))),
        }
    }
}

impl CompositeOutput<'_> {
    /// Rendered elements, in order
    pub fn render_elements(&self) -> Result<Vec<DrawableNode>> {
        self.elements.iter().map(CompositeElement::render).collect()
    }

    /// Render into a container laid out by the output's hints
    pub fn render(&self) -> Result<DrawableNode> {
        Ok(DrawableNode::Container(
            self.layout.container().with_children(self.render_elements()?),
        ))
    }
}
