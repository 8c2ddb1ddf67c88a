//! Domain models and types for Pindica.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Year parameters** ([`YearParameter`]) used to select a year from the API
//! - **The merged raw payload** ([`RawPayload`]) persisted by the extract stage
//! - **The run date** ([`RunDate`]) stamped into every output filename
//! - **Error types** ([`PindicaError`], [`ApiError`], [`DiscoveryError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, PindicaError>`]:
//!
//! ```rust
//! use pindica::domain::{PindicaError, Result};
//!
//! fn example() -> Result<()> {
//!     let config = pindica::config::load_config("pindica.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod payload;
pub mod result;
pub mod run;
pub mod year;

// Re-export commonly used types for convenience
pub use errors::{ApiError, DiscoveryError, PindicaError};
pub use payload::RawPayload;
pub use result::Result;
pub use run::RunDate;
pub use year::YearParameter;
