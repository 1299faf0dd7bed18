//! Command-line interface argument parsing
//!
//! Defines all CLI commands and their arguments using Clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// str-ebs - talk to the Slay the Relics extension backend
#[derive(Parser, Debug)]
#[command(name = "str-ebs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Authenticated client for the Slay the Relics extension backend")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// EBS server URL (overrides config and STR_EBS_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Path to the config file (default: ~/.config/str-ebs/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify a one-time code and store the returned credentials
    ///
    /// Example:
    ///   str-ebs login --code abc123
    #[command(visible_alias = "auth")]
    #[command(display_order = 1)]
    Login {
        /// Code shown by the extension configuration page
        #[arg(long)]
        code: String,
    },

    /// Clear saved credentials
    #[command(display_order = 2)]
    Logout,

    /// Broadcast a message to the extension
    ///
    /// The message is sent as-is, without JSON wrapping.
    ///
    /// Example:
    ///   str-ebs broadcast '{"msg_type":1}'
    #[command(display_order = 3)]
    Broadcast {
        /// Message body
        message: String,
    },

    /// Post a game state read from a file or stdin
    ///
    /// Examples:
    ///   str-ebs game-state state.json
    ///   cat state.json | str-ebs game-state
    #[command(display_order = 4)]
    GameState {
        /// JSON file to send; reads stdin when omitted or `-`
        file: Option<PathBuf>,
    },

    /// Show the effective configuration with the token masked
    #[command(display_order = 5)]
    ShowConfig,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }
}
