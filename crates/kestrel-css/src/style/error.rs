use thiserror::Error;

/// A style value that could not be understood.
///
/// Layout never fails on these: callers log the error and fall back to the
/// default for the property.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// Not a `#hex` color or a known color keyword.
    #[error("invalid color value `{0}`")]
    InvalidColor(String),

    /// Not a positive whole number of pixels.
    #[error("invalid length `{0}`")]
    InvalidLength(String),
}
