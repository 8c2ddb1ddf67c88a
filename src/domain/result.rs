//! Result type alias for Pindica

use super::errors::PindicaError;

/// Result type alias for Pindica operations
///
/// # Examples
///
/// ```
/// use pindica::domain::result::Result;
/// use pindica::domain::errors::PindicaError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PindicaError::Schema("missing column".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PindicaError>;
