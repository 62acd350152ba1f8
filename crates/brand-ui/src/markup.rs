//! HTML/SVG serialization of drawable nodes
//!
//! Colors are written as `currentColor` or `var(--token)` wherever the
//! node says so; the only literal colors in the output are the ones a
//! node carries as [`Paint::Fixed`].

use crate::components::{Container, DrawableNode, Link, LinkTarget, Paint, Svg, SvgShape, Text};
use brand_core::marks::Geometry;
use std::fmt::Write;

/// Escape text content and attribute values
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl DrawableNode {
    /// Serialize to markup
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        write_node(&mut out, self);
        out
    }
}

fn write_node(out: &mut String, node: &DrawableNode) {
    match node {
        DrawableNode::Empty => {}
        DrawableNode::Svg(svg) => write_svg(out, svg),
        DrawableNode::Text(text) => write_text(out, text),
        DrawableNode::Link(link) => write_link(out, link),
        DrawableNode::Container(container) => write_container(out, container),
    }
}

fn write_svg(out: &mut String, svg: &Svg) {
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{}" fill="{}" style="flex: none; line-height: 1;""#,
        svg.width.to_attr(),
        svg.height.to_attr(),
        svg.view_box.to_attr(),
        svg.fill.to_css()
    );
    if let Some(role) = &svg.accessibility.role {
        let _ = write!(out, r#" role="{}""#, escape(role));
    }
    if let Some(label) = &svg.accessibility.label {
        let _ = write!(out, r#" aria-label="{}""#, escape(label));
    }
    out.push('>');

    if let Some(title) = &svg.title {
        let _ = write!(out, "<title>{}</title>", escape(title));
    }
    for shape in &svg.shapes {
        write_shape(out, shape, &svg.fill);
    }
    out.push_str("</svg>");
}

fn write_shape(out: &mut String, shape: &SvgShape, root_fill: &Paint) {
    match &shape.geometry {
        Geometry::Path { d } => {
            let _ = write!(out, r#"<path d="{}""#, escape(d));
        }
        Geometry::Circle { cx, cy, r } => {
            let _ = write!(out, r#"<circle cx="{}" cy="{}" r="{}""#, cx, cy, r);
        }
        Geometry::Ellipse { cx, cy, rx, ry } => {
            let _ = write!(
                out,
                r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}""#,
                cx, cy, rx, ry
            );
        }
    }
    // Shapes painted like the root inherit it instead of repeating it.
    if &shape.fill != root_fill {
        let _ = write!(out, r#" fill="{}""#, escape(&shape.fill.to_css()));
    }
    if let Some(opacity) = shape.opacity {
        let _ = write!(out, r#" fill-opacity="{}""#, opacity);
    }
    out.push_str("/>");
}

fn write_text(out: &mut String, text: &Text) {
    let tag = if text.strong { "strong" } else { "span" };
    let mut style = text.style.to_css();
    if let Some(color) = &text.color {
        let _ = write!(style, " color: {};", color.to_css());
    }
    let _ = write!(
        out,
        r#"<{tag} style="{}">{}</{tag}>"#,
        escape(&style),
        escape(&text.content)
    );
}

fn write_link(out: &mut String, link: &Link) {
    let mut style = format!("color: {};", link.color.to_css());
    if let Some(height) = &link.height {
        let _ = write!(style, " height: {};", height.to_css());
    }
    if let Some(hover) = &link.hover_color {
        let _ = write!(style, " --hover-color: {};", hover.to_css());
    }

    let _ = write!(out, r#"<a href="{}""#, escape(&link.href));
    if link.target == LinkTarget::NewContext {
        out.push_str(r#" target="_blank" rel="noopener noreferrer""#);
    }
    let _ = write!(out, r#" style="{}">"#, escape(&style));
    for child in &link.children {
        write_node(out, child);
    }
    out.push_str("</a>");
}

fn write_container(out: &mut String, container: &Container) {
    let mut style = format!(
        "display: flex; flex-direction: {}; justify-content: {}; align-items: {};",
        container.direction.to_css(),
        container.justify.to_css(),
        container.align.to_css()
    );
    if let Some(gap) = container.gap {
        let _ = write!(style, " gap: {}px;", gap);
    }
    style.push_str(if container.wrap {
        " flex-wrap: wrap;"
    } else {
        " flex-wrap: nowrap;"
    });
    if container.flex_none {
        style.push_str(" flex: none;");
    }
    if let Some(color) = &container.color {
        let _ = write!(style, " color: {};", color.to_css());
    }
    if let Some(size) = &container.font_size {
        let _ = write!(style, " font-size: {};", size.to_css());
    }

    let _ = write!(out, r#"<div style="{}">"#, escape(&style));
    for child in &container.children {
        write_node(out, child);
    }
    out.push_str("</div>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Alignment, Dimension};
    use crate::theme::ColorToken;
    use crate::typography::TextStyle;
    use brand_core::marks::ViewBox;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape("IntellectX"), "IntellectX");
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(DrawableNode::Empty.to_markup(), "");
    }

    #[test]
    fn test_svg_markup() {
        let svg = Svg::square(ViewBox::square(24.0), Dimension::px(36.0))
            .with_title("IntellectX")
            .with_shape(SvgShape {
                geometry: Geometry::Circle {
                    cx: 12.0,
                    cy: 12.0,
                    r: 4.0,
                },
                fill: Paint::CurrentColor,
                opacity: Some(0.5),
            });
        let markup = DrawableNode::Svg(svg).to_markup();

        assert!(markup.starts_with("<svg"));
        assert!(markup.contains(r#"width="36" height="36" viewBox="0 0 24 24""#));
        assert!(markup.contains(r#"fill="currentColor""#));
        assert!(markup.contains("<title>IntellectX</title>"));
        assert!(markup.contains(r#"<circle cx="12" cy="12" r="4" fill-opacity="0.5"/>"#));
        assert!(markup.ends_with("</svg>"));
    }

    #[test]
    fn test_fixed_fill_is_written() {
        let svg = Svg::square(ViewBox::square(24.0), Dimension::em(1.0)).with_shape(SvgShape {
            geometry: Geometry::Path {
                d: "M0 0h24v24H0z".to_string(),
            },
            fill: Paint::Fixed("#FFD54F".to_string()),
            opacity: None,
        });
        let markup = DrawableNode::Svg(svg).to_markup();
        assert!(markup.contains(r##"<path d="M0 0h24v24H0z" fill="#FFD54F"/>"##));
        assert!(markup.contains(r#"width="1em""#));
    }

    #[test]
    fn test_link_markup() {
        let link = Link::new("https://intellectx.app?a=1&b=2")
            .external()
            .with_hover_color(Paint::Token(ColorToken::Link))
            .with_child(DrawableNode::Text(
                Text::new("IntellectX", TextStyle::wordmark(Dimension::px(20.0))).strong(),
            ));
        let markup = DrawableNode::Link(link).to_markup();

        assert!(markup.contains(r#"href="https://intellectx.app?a=1&amp;b=2""#));
        assert!(markup.contains(r#"target="_blank""#));
        assert!(markup.contains("--hover-color: var(--color-link);"));
        assert!(markup.contains(">IntellectX</strong></a>"));
    }

    #[test]
    fn test_container_markup() {
        let container = Container::row()
            .with_align(Alignment::Center)
            .with_gap(4.0)
            .with_color(Paint::Token(ColorToken::TextDescription));
        let markup = DrawableNode::Container(container).to_markup();

        assert!(markup.contains("align-items: center;"));
        assert!(markup.contains("gap: 4px;"));
        assert!(markup.contains("flex-wrap: nowrap;"));
        assert!(markup.contains("color: var(--color-text-description);"));
    }
}
