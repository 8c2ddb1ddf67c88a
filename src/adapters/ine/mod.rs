//! INE Portugal indicator API adapter
//!
//! This module provides the HTTP client for the `pindica.jsp` endpoint, the
//! source trait the extract stage depends on, and helpers for reading the
//! response shape.

pub mod client;
pub mod models;
pub mod source;

pub use client::IneClient;
pub use source::IndicatorSource;
