//! Brand rendering layer
//!
//! - [`request`] - presentation requests and named presets
//! - [`resolver`] - request to composite resolution
//! - [`render`] - mark and wordmark renderers
//! - [`watermark`] - attribution footer
//! - [`page_title`] - ambient document title synchronization

pub mod page_title;
pub mod render;
pub mod request;
pub mod resolver;
pub mod watermark;

pub use page_title::{DocumentTitle, PageTitle, PageTitleSynchronizer, TitleSink, TitleSyncState};
pub use render::{SvgMarkRenderer, WordmarkRenderer};
pub use request::{presets, BrandSize, DisplayType, PresentationRequest, UsageContext, WordmarkVariant};
pub use resolver::{
    resolve, BrandCompositeResolver, CompositeElement, CompositeOutput, LayoutHints, RenderedMark,
    WordmarkText,
};
pub use watermark::BrandWatermark;
