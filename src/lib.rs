//! Logquery - retrieval engine for day-partitioned, line-delimited log files.

pub mod catalog;
pub mod config;
pub mod correlation_query;
pub mod date_query;
pub mod error;
pub mod http_meta;
pub mod parse;
pub mod types;
