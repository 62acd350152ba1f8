//! Theme tokens for IntellectX Chat
//!
//! The brand layer never writes theme values. It reads them only to
//! resolve inherited colors, and it prefers to emit a [`ColorToken`]
//! reference over a concrete color so that switching themes recolors
//! already rendered output.
//!
//! # Usage
//!
//! ```rust
//! use brand_ui::theme::{get_theme, ColorToken, ThemeName};
//!
//! let theme = get_theme(ThemeName::Dark);
//! assert!(theme.is_dark());
//! let link = theme.color(ColorToken::Link);
//! assert!(link.starts_with('#'));
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string (e.g., "#FFFFFF")
pub type Color = String;

// =============================================================================
// Color Tokens
// =============================================================================

/// Named theme colors a component may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorToken {
    /// Primary text
    Text,
    /// Secondary text (section titles)
    TextSecondary,
    /// Descriptive, muted text (watermark)
    TextDescription,
    /// Link color
    Link,
    /// Link color on hover
    LinkHover,
    /// Page background
    Background,
}

impl ColorToken {
    /// All tokens
    pub const ALL: [ColorToken; 6] = [
        ColorToken::Text,
        ColorToken::TextSecondary,
        ColorToken::TextDescription,
        ColorToken::Link,
        ColorToken::LinkHover,
        ColorToken::Background,
    ];

    /// CSS custom property carrying this token
    pub fn css_var(&self) -> &'static str {
        match self {
            ColorToken::Text => "--color-text",
            ColorToken::TextSecondary => "--color-text-secondary",
            ColorToken::TextDescription => "--color-text-description",
            ColorToken::Link => "--color-link",
            ColorToken::LinkHover => "--color-link-hover",
            ColorToken::Background => "--color-bg",
        }
    }
}

/// Semantic colors of a theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticColors {
    /// Main background color
    pub background: Color,
    /// Primary text color
    pub text: Color,
    /// Secondary text color
    pub text_secondary: Color,
    /// Descriptive text color
    pub text_description: Color,
    /// Link color
    pub link: Color,
    /// Link hover color
    pub link_hover: Color,
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Semantic colors
    pub colors: SemanticColors,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self.name, ThemeName::Dark)
    }

    /// Resolve a color token
    pub fn color(&self, token: ColorToken) -> &str {
        match token {
            ColorToken::Text => &self.colors.text,
            ColorToken::TextSecondary => &self.colors.text_secondary,
            ColorToken::TextDescription => &self.colors.text_description,
            ColorToken::Link => &self.colors.link,
            ColorToken::LinkHover => &self.colors.link_hover,
            ColorToken::Background => &self.colors.background,
        }
    }

    /// CSS declarations binding every token to this theme's value
    pub fn css_variables(&self) -> String {
        ColorToken::ALL
            .iter()
            .map(|token| format!("{}: {};", token.css_var(), self.color(*token)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        colors: SemanticColors {
            background: "#FFFFFF".to_string(),
            text: "#1F1F1F".to_string(),
            text_secondary: "#595959".to_string(),
            text_description: "#8C8C8C".to_string(),
            link: "#1677FF".to_string(),
            link_hover: "#69B1FF".to_string(),
        },
    }
}

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        colors: SemanticColors {
            background: "#141414".to_string(),
            text: "#F0F0F0".to_string(),
            text_secondary: "#BFBFBF".to_string(),
            text_description: "#A6A6A6".to_string(),
            link: "#1668DC".to_string(),
            link_hover: "#3C89E8".to_string(),
        },
    }
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

/// Theme provider state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeState {
    /// Current theme name
    pub theme_name: ThemeName,
    /// Current theme (regenerated on deserialization)
    #[serde(skip, default = "light_theme")]
    pub theme: Theme,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeName::Light)
    }
}

impl ThemeState {
    /// Create a new theme state with the given theme
    pub fn new(theme_name: ThemeName) -> Self {
        Self {
            theme_name,
            theme: get_theme(theme_name),
        }
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme_name: ThemeName) {
        tracing::debug!(theme = ?theme_name, "Theme switched");
        self.theme_name = theme_name;
        self.theme = get_theme(theme_name);
    }

    /// Get the current theme
    pub fn current_theme(&self) -> &Theme {
        &self.theme
    }
}
