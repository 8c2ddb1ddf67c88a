//! Extract stage: range discovery and raw fetching

pub mod discovery;
pub mod fetcher;

pub use discovery::{discover_year_range, year_parameters};
pub use fetcher::{fetch_raw_data, FetchOutcome, FetchReport, SkippedYear};
