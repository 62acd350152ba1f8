//! Error types for brand resolution and rendering
//!
//! Every failure here is a caller-input error detected synchronously.
//! Nothing is transient, so nothing is retried.

use crate::marks::ColorMode;
use thiserror::Error;

/// Errors produced while resolving or rendering brand assets
#[derive(Debug, Error)]
pub enum BrandError {
    /// A size that is zero, negative, or not finite was requested
    #[error("Invalid dimension: size must be positive, got {size}")]
    InvalidDimension {
        /// The rejected size value
        size: f32,
    },

    /// The generic usage context was used without an explicit parameter
    #[error("Missing presentation parameter: {0}")]
    MissingPresentationParameter(&'static str),

    /// The brand identity has no mark for the requested color mode
    #[error("Unsupported color mode: {0}")]
    UnsupportedColorMode(ColorMode),

    /// An identity override failed validation
    #[error("Invalid brand identity: {0}")]
    InvalidIdentity(String),

    /// An identity override could not be parsed
    #[error("Brand configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for brand operations
pub type Result<T> = std::result::Result<T, BrandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BrandError::InvalidDimension { size: -4.0 };
        assert_eq!(
            err.to_string(),
            "Invalid dimension: size must be positive, got -4"
        );

        let err = BrandError::MissingPresentationParameter("type");
        assert_eq!(err.to_string(), "Missing presentation parameter: type");

        let err = BrandError::UnsupportedColorMode(ColorMode::FlatColor);
        assert_eq!(err.to_string(), "Unsupported color mode: flat-color");
    }

    #[test]
    fn test_config_error_from_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: BrandError = parse_err.into();
        assert!(matches!(err, BrandError::Config(_)));
    }
}
