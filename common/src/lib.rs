//! Shared ambient setup for the judge feedback workspace: configuration loading and logging.

pub mod config;
pub mod logger;
