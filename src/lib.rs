//! Amostra Log Library
//!
//! Lookup, normalization and logging of lubricant sample records, with
//! tab-delimited and Excel export of the running log.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod normalize;
pub mod output;
pub mod storage;
pub mod store;
pub mod types;
