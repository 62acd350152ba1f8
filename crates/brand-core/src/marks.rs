//! Vector mark definitions
//!
//! A mark is the iconographic half of the brand. Both variants share one
//! geometry on a square 24x24 view box and differ only in how each shape
//! is painted:
//!
//! - [`ColorMode::Monochrome`] shapes carry no color at all. They are
//!   painted with the container's current text color at a per-shape
//!   opacity, so a theme switch recolors them for free.
//! - [`ColorMode::FlatColor`] shapes carry a fixed palette that belongs
//!   to the identity and ignores the theme.

use serde::{Deserialize, Serialize};

/// How a mark is colored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// Single tone inherited from the surrounding text color
    Monochrome,
    /// Fixed multi-tone palette, independent of theme
    FlatColor,
}

impl ColorMode {
    /// Stable identifier used in logs and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Monochrome => "monochrome",
            ColorMode::FlatColor => "flat-color",
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SVG view box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    /// Minimum x
    pub min_x: f32,
    /// Minimum y
    pub min_y: f32,
    /// Width in user units
    pub width: f32,
    /// Height in user units
    pub height: f32,
}

impl ViewBox {
    /// Square view box anchored at the origin
    pub const fn square(side: f32) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width: side,
            height: side,
        }
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Render as the value of an SVG `viewBox` attribute
    pub fn to_attr(&self) -> String {
        format!(
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

/// Shape geometry in view box units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    /// Path data
    Path {
        /// SVG path commands
        d: String,
    },
    /// Circle
    Circle {
        /// Center x
        cx: f32,
        /// Center y
        cy: f32,
        /// Radius
        r: f32,
    },
    /// Ellipse
    Ellipse {
        /// Center x
        cx: f32,
        /// Center y
        cy: f32,
        /// Horizontal radius
        rx: f32,
        /// Vertical radius
        ry: f32,
    },
}

impl Geometry {
    fn path(d: &str) -> Self {
        Geometry::Path { d: d.to_string() }
    }
}

/// How one shape is painted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Tone {
    /// Current text color at the given opacity (0.0 - 1.0)
    Inherit {
        /// Fill opacity
        opacity: f32,
    },
    /// Fixed hex color
    Fixed {
        /// Hex color (e.g. "#FFD54F")
        color: String,
    },
}

/// A single painted shape of a mark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkShape {
    /// Geometry
    pub geometry: Geometry,
    /// Paint
    pub tone: Tone,
}

/// A complete vector mark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkDefinition {
    /// Accessible title embedded in the SVG
    pub title: String,
    /// View box; always square for brand marks
    pub view_box: ViewBox,
    /// Shapes in paint order
    pub shapes: Vec<MarkShape>,
}

impl MarkDefinition {
    /// Intrinsic aspect ratio of the mark
    pub fn aspect_ratio(&self) -> f32 {
        self.view_box.aspect_ratio()
    }

    /// True when no shape carries a fixed color
    pub fn inherits_color(&self) -> bool {
        self.shapes
            .iter()
            .all(|shape| matches!(shape.tone, Tone::Inherit { .. }))
    }

    /// True when every shape carries a fixed color
    pub fn is_theme_invariant(&self) -> bool {
        self.shapes
            .iter()
            .all(|shape| matches!(shape.tone, Tone::Fixed { .. }))
    }
}

// =============================================================================
// Brand Geometry
// =============================================================================

/// Side of the square view box the brand geometry is drawn on
pub const MARK_VIEW_BOX_SIDE: f32 = 24.0;

enum RowGeometry {
    Path(&'static str),
    Circle { cx: f32, cy: f32, r: f32 },
    Ellipse { cx: f32, cy: f32, rx: f32, ry: f32 },
}

impl RowGeometry {
    fn build(&self) -> Geometry {
        match *self {
            RowGeometry::Path(d) => Geometry::path(d),
            RowGeometry::Circle { cx, cy, r } => Geometry::Circle { cx, cy, r },
            RowGeometry::Ellipse { cx, cy, rx, ry } => Geometry::Ellipse { cx, cy, rx, ry },
        }
    }
}

// One row per shape: geometry plus the monochrome opacity and the flat color.
// Rows are in paint order.
struct ShapeRow {
    geometry: RowGeometry,
    opacity: f32,
    flat: &'static str,
}

const SHAPE_ROWS: [ShapeRow; 13] = [
    // Head
    ShapeRow {
        geometry: RowGeometry::Path("M22.951 13.475C22.951 19.672 18.082 24 11.975 24 5.87 24 1 19.59 1 13.393c0-1.843.41-2.633 2.58-2.922 3.89-.518 5.942-.313 8.396-.313 2.453 0 5.942-.104 8.395.313 2.007.342 2.457.71 2.58 3.004z"),
        opacity: 0.35,
        flat: "#FFD54F",
    },
    // Mouth
    ShapeRow {
        geometry: RowGeometry::Path("M11.955 19.209c-2.314 0-2.928.286-2.928.286s.287 2.212 2.928 2.212c2.642 0 2.928-2.212 2.928-2.212s-.614-.287-2.928-.287z"),
        opacity: 0.85,
        flat: "#5D4037",
    },
    // Brim
    ShapeRow {
        geometry: RowGeometry::Ellipse {
            cx: 12.017,
            cy: 11.509,
            rx: 9.133,
            ry: 0.942,
        },
        opacity: 0.55,
        flat: "#8D6E63",
    },
    // Band
    ShapeRow {
        geometry: RowGeometry::Path("M9.969 12.451c.052-1.226-.04-1.867-.45-2.985 0 0 .777-.987 2.21-.987 1.434 0 2.458.25 2.458.25-.248 1.376-.26 2.206-.205 3.722H9.97z"),
        opacity: 0.15,
        flat: "#FFE082",
    },
    // Eye whites
    ShapeRow {
        geometry: RowGeometry::Path("M8.633 18.535c1.207-.58 2.032-1.762 2.032-3.217 0-2.081-1.687-3.932-3.768-3.932-2.08 0-3.85 1.605-3.85 3.686 0 1.146.537 2.196 1.365 2.91a4.582 4.582 0 011.625-.289c1.04 0 1.972.327 2.596.842zM15.318 18.535c-1.207-.58-2.032-1.762-2.032-3.217 0-2.081 1.687-3.932 3.768-3.932 2.08 0 3.85 1.605 3.85 3.686 0 1.146-.537 2.196-1.365 2.91a4.582 4.582 0 00-1.625-.289c-1.04 0-1.972.327-2.596.842z"),
        opacity: 0.05,
        flat: "#FFFFFF",
    },
    // Pupils
    ShapeRow {
        geometry: RowGeometry::Path("M16.808 17.447a2.293 2.293 0 110-4.586 2.293 2.293 0 010 4.586zM7.143 17.447a2.293 2.293 0 100-4.586 2.293 2.293 0 000 4.586z"),
        opacity: 1.0,
        flat: "#1A1A1A",
    },
    // Cloud
    ShapeRow {
        geometry: RowGeometry::Path("M13.04.902c-1.149 0-1.597-.942-3.358-.9-1.916 0-2.785 1.064-3.727 1.883-.16.14-.942.574-1.31.737-1.612.717-2.826 1.761-2.826 3.318 0 1.696 1.43 3.071 3.194 3.071.29 0 .57-.037.838-.106.712.863 1.816 1.364 3.053 1.417 1.925.082 2.54-1.25 3.645-.697.758.38 1.133.697 2.334.697 1.402 0 2.053-.43 2.457-.901.738-.86 1.874-.328 2.58-.328 1.538 0 2.785-1.192 2.785-2.662s-1.246-2.662-2.784-2.662c-.422 0-1.217.104-1.393-.573C18.241 2.09 16.878.82 14.924.82c-.763 0-1.449.082-1.884.082z"),
        opacity: 0.55,
        flat: "#A1887F",
    },
    ShapeRow {
        geometry: RowGeometry::Circle {
            cx: 4.891,
            cy: 1.025,
            r: 0.778,
        },
        opacity: 0.55,
        flat: "#A1887F",
    },
    ShapeRow {
        geometry: RowGeometry::Circle {
            cx: 20.699,
            cy: 3.4,
            r: 1.27,
        },
        opacity: 0.25,
        flat: "#D7CCC8",
    },
    // Teeth
    ShapeRow {
        geometry: RowGeometry::Path("M9.701 19.34c.45-.068 1.163-.131 2.254-.131 1 0 1.683.053 2.136.114-.127.48-1.062.664-2.197.664-1.122 0-2.05-.18-2.193-.647z"),
        opacity: 0.05,
        flat: "#FFFFFF",
    },
    // Tongue
    ShapeRow {
        geometry: RowGeometry::Path("M11.976 23.099c1.646 0 1.909-1.678 1.96-2.098.039-.34-.137-.511-.33-.627-.191-.116-.768-.224-1.63-.224-.862 0-1.435.108-1.63.224-.196.116-.373.288-.33.627.051.42.314 2.098 1.96 2.098z"),
        opacity: 0.55,
        flat: "#E57373",
    },
    // Cap
    ShapeRow {
        geometry: RowGeometry::Path("M12.934 9.972c-.47-.319-1.143-.348-1.621-.043a4.086 4.086 0 01-2.204.638c-2.217 0-4.014-1.742-4.014-3.89 0-2.149 1.797-3.89 4.014-3.89 1.116 0 2.126.44 2.853 1.154.406.397 1.072.51 1.597.295.407-.167.855-.259 1.324-.259 1.878 0 3.4 1.475 3.4 3.295 0 1.82-1.523 3.295-3.4 3.295-.725 0-1.397-.22-1.95-.595z"),
        opacity: 0.25,
        flat: "#D7CCC8",
    },
    // Dots
    ShapeRow {
        geometry: RowGeometry::Path("M3.375 9.502a1.31 1.31 0 100-2.62 1.31 1.31 0 000 2.62zM15.702 9.175a1.106 1.106 0 100-2.212 1.106 1.106 0 000 2.212z"),
        opacity: 0.85,
        flat: "#5D4037",
    },
];

/// Build the monochrome mark
pub fn monochrome_mark(title: &str) -> MarkDefinition {
    MarkDefinition {
        title: title.to_string(),
        view_box: ViewBox::square(MARK_VIEW_BOX_SIDE),
        shapes: SHAPE_ROWS
            .iter()
            .map(|row| MarkShape {
                geometry: row.geometry.build(),
                tone: Tone::Inherit {
                    opacity: row.opacity,
                },
            })
            .collect(),
    }
}

/// Build the flat multi-color mark
pub fn flat_mark(title: &str) -> MarkDefinition {
    MarkDefinition {
        title: title.to_string(),
        view_box: ViewBox::square(MARK_VIEW_BOX_SIDE),
        shapes: SHAPE_ROWS
            .iter()
            .map(|row| MarkShape {
                geometry: row.geometry.build(),
                tone: Tone::Fixed {
                    color: row.flat.to_string(),
                },
            })
            .collect(),
    }
}
