//! Design tokens for IntellectX Chat
//!
//! Spacing, brand sizing, and type tokens used by the brand layer.

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
/// Based on a 4px base unit with t-shirt sizes
pub mod spacing {
    /// 4px - Extra small
    pub const SPACE_XS: f32 = 4.0;
    /// 8px - Small
    pub const SPACE_SM: f32 = 8.0;
}

// =============================================================================
// Brand Sizing Tokens
// =============================================================================

/// Brand element sizes
pub mod brand {
    /// Logo size in chat headers (36px)
    pub const HEADER_SIZE: f32 = 36.0;
    /// Wordmark size on the welcome layout (24px)
    pub const WELCOME_WORDMARK_SIZE: f32 = 24.0;
    /// Watermark wordmark size (20px)
    pub const WATERMARK_WORDMARK_SIZE: f32 = 20.0;
    /// Watermark phrase font size (12px)
    pub const WATERMARK_FONT_SIZE: f32 = 12.0;
    /// Gap between watermark segments (4px)
    pub const WATERMARK_GAP: f32 = super::spacing::SPACE_XS;
    /// Gap between mark, wordmark, and adornment (8px)
    pub const COMPOSITE_GAP: f32 = super::spacing::SPACE_SM;
    /// Wordmark and adornment size relative to the mark in a composite
    pub const COMPOSITE_TEXT_SCALE: f32 = 0.5;
}

// =============================================================================
// Typography Tokens
// =============================================================================

/// Line height multipliers
pub mod line_height {
    /// None (1.0)
    pub const NONE: f32 = 1.0;
}

/// Font weight values
pub mod font_weight {
    /// Normal/Regular (400)
    pub const NORMAL: u16 = 400;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}
