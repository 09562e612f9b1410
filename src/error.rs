//! Typed errors raised by the scoring and projection core.

use thiserror::Error;

/// Errors that can occur while building inputs for, or evaluating, the core.
///
/// All variants are recoverable: the caller can fix the input and retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A factor table is missing a factor, repeats one, names an unknown
    /// one, or holds a value outside its allowed range.
    #[error("invalid factor: {0}")]
    InvalidFactor(String),

    /// Astronomical data of a body failed validation
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Mission parameters failed validation
    #[error("invalid mission parameters: {0}")]
    InvalidMission(String),

    /// No reference body matches the given name or index
    #[error("unknown body: {0}")]
    UnknownBody(String),

    /// A projection was requested before mission parameters were supplied
    #[error("no mission defined; set mission parameters first")]
    NoMissionDefined,

    /// A comparison was requested before any body was selected
    #[error("no body selected; select a known body or create a custom one first")]
    NoBodySelected,
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
