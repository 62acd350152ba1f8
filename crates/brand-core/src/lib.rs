//! Core brand identity for IntellectX Chat
//!
//! This crate owns the process-wide brand constants: names, marks,
//! outbound links, and About page content. It also defines the error type
//! shared by every brand consumer and the tracing setup.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod about;
pub mod branding;
pub mod error;
pub mod identity;
pub mod marks;
pub mod telemetry;

pub use error::{BrandError, Result};
pub use identity::{brand_identity, BrandIdentity, BrandOverrides};
pub use marks::{ColorMode, MarkDefinition, Tone};
