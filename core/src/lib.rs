//! draft-analysis-core: statistics over draft-simulation results.
//!
//! Data flows one way:
//!   source (CSV) -> Vec<Record> -> scanner + summary -> report -> sink

pub mod config;
pub mod contrast;
pub mod error;
pub mod record;
pub mod report;
pub mod scanner;
pub mod source;
pub mod summary;
pub mod table;
pub mod types;
