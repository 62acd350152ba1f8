//! Drawable component model
//!
//! Components are plain Rust structs with serializable props that the
//! host view layer draws. Nothing here holds state or performs I/O.
//!
//! # Available Components
//!
//! - [`Svg`] - Vector graphic with a fixed view box
//! - [`Text`] - Styled text run
//! - [`Link`] - Outbound hyperlink wrapping other nodes
//! - [`Container`] - Flex layout container
//!
//! [`DrawableNode`] is the closed union over all of them.

use crate::theme::{Color, ColorToken};
use crate::typography::TextStyle;
use brand_core::marks::{Geometry, ViewBox};
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Dimension value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum Dimension {
    /// Fixed pixel value
    Px(f32),
    /// Multiple of the current font size
    Em(f32),
    /// Auto-size
    #[default]
    Auto,
}

impl Dimension {
    /// Create a pixel dimension
    pub fn px(value: f32) -> Self {
        Dimension::Px(value)
    }

    /// Create a font-relative dimension
    pub fn em(value: f32) -> Self {
        Dimension::Em(value)
    }

    /// Numeric magnitude, if any
    pub fn value(&self) -> Option<f32> {
        match self {
            Dimension::Px(v) | Dimension::Em(v) => Some(*v),
            Dimension::Auto => None,
        }
    }

    /// CSS length
    pub fn to_css(&self) -> String {
        match self {
            Dimension::Px(v) => format!("{}px", v),
            Dimension::Em(v) => format!("{}em", v),
            Dimension::Auto => "auto".to_string(),
        }
    }

    /// Bare attribute value; pixels are unitless in SVG attributes
    pub fn to_attr(&self) -> String {
        match self {
            Dimension::Px(v) => v.to_string(),
            other => other.to_css(),
        }
    }
}

/// How a color is supplied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum Paint {
    /// No paint
    None,
    /// Inherit the container's current text color
    CurrentColor,
    /// Theme token, resolved by the host at draw time
    Token(ColorToken),
    /// Fixed color
    Fixed(Color),
}

impl Paint {
    /// CSS color value
    pub fn to_css(&self) -> String {
        match self {
            Paint::None => "none".to_string(),
            Paint::CurrentColor => "currentColor".to_string(),
            Paint::Token(token) => format!("var({})", token.css_var()),
            Paint::Fixed(color) => color.clone(),
        }
    }

    /// True when the color follows the theme
    pub fn follows_theme(&self) -> bool {
        !matches!(self, Paint::Fixed(_))
    }
}

/// Alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Stretch to fill
    #[default]
    Stretch,
    /// Align to start
    Start,
    /// Align to center
    Center,
    /// Align to end
    End,
}

impl Alignment {
    /// CSS keyword
    pub fn to_css(&self) -> &'static str {
        match self {
            Alignment::Stretch => "stretch",
            Alignment::Start => "flex-start",
            Alignment::Center => "center",
            Alignment::End => "flex-end",
        }
    }
}

/// Justify content options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Start (default)
    #[default]
    Start,
    /// Center
    Center,
    /// End
    End,
    /// Space between
    SpaceBetween,
}

impl JustifyContent {
    /// CSS keyword
    pub fn to_css(&self) -> &'static str {
        match self {
            JustifyContent::Start => "flex-start",
            JustifyContent::Center => "center",
            JustifyContent::End => "flex-end",
            JustifyContent::SpaceBetween => "space-between",
        }
    }
}

/// Flex direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    /// Row (horizontal)
    #[default]
    Row,
    /// Column (vertical)
    Column,
}

impl FlexDirection {
    /// CSS keyword
    pub fn to_css(&self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
        }
    }
}

/// Accessibility properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityProps {
    /// Accessible label for screen readers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// ARIA role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

fn is_default_a11y(a11y: &AccessibilityProps) -> bool {
    a11y == &AccessibilityProps::default()
}

// =============================================================================
// Svg Component
// =============================================================================

/// One painted shape of an [`Svg`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgShape {
    /// Geometry in view box units
    pub geometry: Geometry,
    /// Fill paint
    pub fill: Paint,
    /// Fill opacity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

/// Vector graphic component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Svg {
    /// View box
    pub view_box: ViewBox,
    /// Rendered width
    pub width: Dimension,
    /// Rendered height
    pub height: Dimension,
    /// Root fill; shapes painted the same way omit their own
    pub fill: Paint,
    /// Embedded `<title>`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Shapes in paint order
    pub shapes: Vec<SvgShape>,
    /// Accessibility props
    #[serde(default, skip_serializing_if = "is_default_a11y")]
    pub accessibility: AccessibilityProps,
}

impl Svg {
    /// Create an SVG of equal width and height
    pub fn square(view_box: ViewBox, size: Dimension) -> Self {
        Self {
            view_box,
            width: size.clone(),
            height: size,
            fill: Paint::CurrentColor,
            title: None,
            shapes: Vec::new(),
            accessibility: AccessibilityProps::default(),
        }
    }

    /// Set the embedded title and accessible label
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.accessibility.label = Some(title.clone());
        self.accessibility.role = Some("img".to_string());
        self.title = Some(title);
        self
    }

    /// Set the root fill
    pub fn with_fill(mut self, fill: Paint) -> Self {
        self.fill = fill;
        self
    }

    /// Append a shape
    pub fn with_shape(mut self, shape: SvgShape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Intrinsic aspect ratio from the view box
    pub fn intrinsic_aspect_ratio(&self) -> f32 {
        self.view_box.aspect_ratio()
    }

    /// Declared size when width and height agree
    pub fn declared_size(&self) -> Option<&Dimension> {
        (self.width == self.height).then_some(&self.width)
    }

    /// True when every paint follows the theme
    pub fn follows_theme(&self) -> bool {
        self.fill.follows_theme() && self.shapes.iter().all(|s| s.fill.follows_theme())
    }
}

// =============================================================================
// Text Component
// =============================================================================

/// Text component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Text content
    pub content: String,
    /// Typography
    pub style: TextStyle,
    /// Text color override; `None` inherits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Paint>,
    /// Render with strong emphasis
    #[serde(default)]
    pub strong: bool,
}

impl Text {
    /// Create new text component
    pub fn new(content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            content: content.into(),
            style,
            color: None,
            strong: false,
        }
    }

    /// Render with strong emphasis
    pub fn strong(mut self) -> Self {
        self.strong = true;
        self
    }
}

// =============================================================================
// Link Component
// =============================================================================

/// Where a link opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkTarget {
    /// Current browsing context
    #[default]
    SameContext,
    /// New browsing context
    NewContext,
}

/// Hyperlink wrapping other nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Link destination
    pub href: String,
    /// Browsing context
    #[serde(default)]
    pub target: LinkTarget,
    /// Resting color
    pub color: Paint,
    /// Hover color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_color: Option<Paint>,
    /// Fixed box height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    /// Link content
    pub children: Vec<DrawableNode>,
}

impl Link {
    /// Create a link that inherits its color
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            target: LinkTarget::SameContext,
            color: Paint::CurrentColor,
            hover_color: None,
            height: None,
            children: Vec::new(),
        }
    }

    /// Open in a new browsing context
    pub fn external(mut self) -> Self {
        self.target = LinkTarget::NewContext;
        self
    }

    /// Set hover color
    pub fn with_hover_color(mut self, color: Paint) -> Self {
        self.hover_color = Some(color);
        self
    }

    /// Set box height
    pub fn with_height(mut self, height: Dimension) -> Self {
        self.height = Some(height);
        self
    }

    /// Append a child
    pub fn with_child(mut self, child: DrawableNode) -> Self {
        self.children.push(child);
        self
    }
}

// =============================================================================
// Container Component
// =============================================================================

/// Flex layout container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Flex direction
    #[serde(default)]
    pub direction: FlexDirection,
    /// Justify content (main axis alignment)
    #[serde(default)]
    pub justify: JustifyContent,
    /// Align items (cross axis alignment)
    #[serde(default)]
    pub align: Alignment,
    /// Gap between children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    /// Whether to wrap children
    #[serde(default)]
    pub wrap: bool,
    /// Do not grow or shrink inside a parent flex box
    #[serde(default)]
    pub flex_none: bool,
    /// Text color for descendants
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Paint>,
    /// Font size for descendants
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Dimension>,
    /// Children
    pub children: Vec<DrawableNode>,
}

impl Container {
    /// Create a row container
    pub fn row() -> Self {
        Self {
            direction: FlexDirection::Row,
            ..Default::default()
        }
    }

    /// Set align items
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set gap
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Keep the container at its content size
    pub fn flex_none(mut self) -> Self {
        self.flex_none = true;
        self
    }

    /// Set descendant text color
    pub fn with_color(mut self, color: Paint) -> Self {
        self.color = Some(color);
        self
    }

    /// Set descendant font size
    pub fn with_font_size(mut self, size: Dimension) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Append a child
    pub fn with_child(mut self, child: DrawableNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append children
    pub fn with_children(mut self, children: impl IntoIterator<Item = DrawableNode>) -> Self {
        self.children.extend(children);
        self
    }
}

// =============================================================================
// Drawable Node
// =============================================================================

/// Any drawable output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum DrawableNode {
    /// Renders nothing
    Empty,
    /// Vector graphic
    Svg(Svg),
    /// Text run
    Text(Text),
    /// Hyperlink
    Link(Link),
    /// Layout container
    Container(Container),
}

impl DrawableNode {
    /// Direct children
    pub fn children(&self) -> &[DrawableNode] {
        match self {
            DrawableNode::Link(link) => &link.children,
            DrawableNode::Container(container) => &container.children,
            _ => &[],
        }
    }

    /// Concatenated text of this subtree, space separated
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join(" ")
    }

    fn collect_text<'a>(&'a self, parts: &mut Vec<&'a str>) {
        if let DrawableNode::Text(text) = self {
            parts.push(&text.content);
        }
        for child in self.children() {
            child.collect_text(parts);
        }
    }

    /// All links in this subtree, depth first
    pub fn links(&self) -> Vec<&Link> {
        let mut found = Vec::new();
        self.collect_links(&mut found);
        found
    }

    fn collect_links<'a>(&'a self, found: &mut Vec<&'a Link>) {
        if let DrawableNode::Link(link) = self {
            found.push(link);
        }
        for child in self.children() {
            child.collect_links(found);
        }
    }

    /// First SVG in this subtree
    pub fn first_svg(&self) -> Option<&Svg> {
        if let DrawableNode::Svg(svg) = self {
            return Some(svg);
        }
        self.children().iter().find_map(DrawableNode::first_svg)
    }
}
