//! External system integrations for Pindica.
//!
//! - [`ine`] - INE Portugal statistical indicator API
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind a trait
//! ([`ine::IndicatorSource`]) so the pipeline can be tested against in-memory
//! sources or a mock HTTP server.
//!
//! ```rust,no_run
//! use pindica::adapters::ine::IneClient;
//! use pindica::config::ApiConfig;
//!
//! # fn example() -> pindica::domain::Result<()> {
//! let client = IneClient::new(&ApiConfig::default())?;
//! println!("{}", client.base_url());
//! # Ok(())
//! # }
//! ```

pub mod ine;
