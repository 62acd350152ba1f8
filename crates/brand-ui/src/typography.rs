//! Typography for brand text
//!
//! Wordmarks and adornment labels are text, not glyph outlines, so they
//! follow the surrounding font stack and only set size and weight.

use crate::components::Dimension;
use crate::tokens::{font_weight, line_height};
use serde::{Deserialize, Serialize};

/// A text style definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size
    pub font_size: Dimension,
    /// Font weight (400, 600, 700)
    pub font_weight: u16,
    /// Line height multiplier; `None` keeps the inherited value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(font_size: Dimension, font_weight: u16) -> Self {
        Self {
            font_size,
            font_weight,
            line_height: None,
        }
    }

    /// Set line height
    pub fn with_line_height(mut self, lh: f32) -> Self {
        self.line_height = Some(lh);
        self
    }

    /// Bold wordmark style
    pub fn wordmark(size: Dimension) -> Self {
        Self::new(size, font_weight::BOLD).with_line_height(line_height::NONE)
    }

    /// Regular label style
    pub fn label(size: Dimension) -> Self {
        Self::new(size, font_weight::NORMAL)
    }

    /// CSS declarations for this style
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "font-size: {}; font-weight: {};",
            self.font_size.to_css(),
            self.font_weight
        );
        if let Some(lh) = self.line_height {
            css.push_str(&format!(" line-height: {};", lh));
        }
        css
    }
}
