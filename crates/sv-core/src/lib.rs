//! Core infrastructure for shadervec
//!
//! This crate provides the error types, configuration and logging
//! bootstrap shared by the vector crate and the command line tool.

pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::{Error, Result, VectorError};
