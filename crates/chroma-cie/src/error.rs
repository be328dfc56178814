//! Error types for illuminant and adaptation operations.

use thiserror::Error;

/// Result type alias using [`CieError`] as the error type.
pub type CieResult<T> = std::result::Result<T, CieError>;

/// Errors raised while resolving whitepoints or building adaptation
/// matrices.
#[derive(Debug, Error)]
pub enum CieError {
    /// Illuminant name is not part of the standard set for the observer.
    #[error("unknown illuminant '{name}' for the {observer}\u{b0} observer")]
    UnknownIlluminant {
        /// Name as supplied by the caller.
        name: String,
        /// Observer angle in degrees (2 or 10).
        observer: u8,
    },

    /// Observer angle is not 2 or 10.
    #[error("unknown observer angle '{0}' (expected 2 or 10)")]
    UnknownObserver(String),

    /// Adaptation method name has not been registered.
    #[error("unknown adaptation method '{0}'")]
    UnknownMethod(String),

    /// An adaptation method with this name already exists.
    #[error("adaptation method '{0}' is already registered")]
    DuplicateMethod(String),

    /// A cone-response matrix could not be inverted.
    #[error("singular matrix: {0}")]
    Singular(String),
}
