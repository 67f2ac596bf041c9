use thiserror::Error;

/// A content-type string that could not be parsed: missing `/`, empty type or
/// subtype, a `/` inside the subtype, or a parameter segment without `=`.
///
/// This is an expected outcome for untrusted input, not a fault; callers
/// should treat "no media type" as a first-class result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid media type: {0:?}")]
pub struct InvalidMediaType(pub String);

pub type Result<T> = std::result::Result<T, InvalidMediaType>;
