//! Error types for working-space operations.

use thiserror::Error;

/// Result type alias using [`SpaceError`] as the error type.
pub type SpaceResult<T> = std::result::Result<T, SpaceError>;

/// Errors raised while deriving matrices or resolving spaces.
#[derive(Debug, Error)]
pub enum SpaceError {
    /// No space with this name is registered.
    #[error("unknown RGB working space '{0}'")]
    UnknownSpace(String),

    /// A space with this name already exists in the registry.
    #[error("RGB working space '{0}' is already registered")]
    DuplicateSpace(String),

    /// The primaries matrix could not be inverted.
    #[error("singular matrix: {0}")]
    Singular(String),

    /// Whitepoint resolution or chromatic adaptation failed.
    #[error(transparent)]
    Cie(#[from] chroma_cie::CieError),
}
