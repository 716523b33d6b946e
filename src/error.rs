//! Errors returned when parsing or converting colors.

/// The input could not be parsed as a color.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input matches none of the supported notations, or a notation was
    /// recognized but is malformed.
    #[error("unrecognized color format: {0:?}")]
    UnrecognizedFormat(String),
}

/// The requested target format is not one of the supported identifiers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid target format: {0:?}")]
pub struct InvalidTargetFormatError(pub String);

/// Any error produced by this crate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source color could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The target format is not supported.
    #[error(transparent)]
    InvalidTargetFormat(#[from] InvalidTargetFormatError),
}

/// A result with this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
