//! Pipeline orchestration
//!
//! [`Pipeline`] owns the configuration, the indicator source and the run date,
//! and runs the extract and transform stages in order. Each entry point
//! returns a [`RunSummary`].

pub mod coordinator;
pub mod summary;

pub use coordinator::Pipeline;
pub use summary::RunSummary;
