//! Brand UI for IntellectX Chat
//!
//! Design system, drawable component model, and the brand rendering layer.
//!
//! # Modules
//!
//! - [`theme`] - Light and dark themes, color tokens
//! - [`tokens`] - Spacing and brand sizing tokens
//! - [`typography`] - Text styles
//! - [`components`] - Drawable component model
//! - [`markup`] - HTML/SVG serialization
//! - [`navigation`] - Routes and their titles
//! - [`brand`] - Brand resolution, rendering, watermark, page title

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod brand;
pub mod components;
pub mod markup;
pub mod navigation;
pub mod theme;
pub mod tokens;
pub mod typography;

pub use brand::{
    BrandCompositeResolver, BrandSize, BrandWatermark, CompositeOutput, DisplayType, PageTitle,
    PageTitleSynchronizer, PresentationRequest, SvgMarkRenderer, UsageContext, WordmarkRenderer,
};
pub use components::DrawableNode;
pub use theme::{Theme, ThemeName, ThemeState};
