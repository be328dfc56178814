//! Error types for color model operations.

use thiserror::Error;

/// Result type alias using [`ColorError`] as the error type.
pub type ColorResult<T> = std::result::Result<T, ColorError>;

/// Errors raised by constructors, parsers, and conversions.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A component was outside its domain at construction time.
    #[error("component {component} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Component name ("r", "alpha", ...).
        component: &'static str,
        /// Offending value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// A string did not match the hex color grammar.
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),

    /// A conversion produced a non-finite component. This indicates a bug
    /// upstream of the conversion rather than bad input.
    #[error("non-finite result in {0}")]
    NonFinite(&'static str),

    /// Working-space lookup or transform failed.
    #[error(transparent)]
    Space(#[from] chroma_spaces::SpaceError),

    /// Whitepoint or adaptation failure.
    #[error(transparent)]
    Cie(#[from] chroma_cie::CieError),
}
