#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

//! ## Architecture
//!
//! - **[`client`]** - the blocking EBS client and its wire types
//! - **[`config`]** - API URL and credential storage
//! - **[`error`]** - error type shared by all of the above
//! - **[`cli`]**, **[`commands`]**, **[`logging`]** - the `str-ebs` binary

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

/// Client type alias for convenience
pub use client::{EbsClient, LastSuccess, User};

/// Error type alias for convenience
pub use error::{Error, Result};

/// Configuration type alias for convenience
pub use config::{ApiConfig, Config};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
