//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::build;

/// Send notifications and connect users through the Engagespot REST API
#[derive(Parser, Debug)]
#[command(name = "engagespot")]
#[command(about = "Send notifications and connect users through the Engagespot REST API")]
#[command(long_about = "
Command-line client for the Engagespot notification API.

Credentials are read from a TOML configuration file and/or ENGAGESPOT__*
environment variables, e.g. ENGAGESPOT__ENGAGESPOT__API_KEY and
ENGAGESPOT__ENGAGESPOT__API_SECRET.

EXAMPLES:
    # Send a notification to two users
    engagespot send \"Deploy finished\" --message \"v1.2 is live\" \\
        --recipient alice@example.com --recipient bob@example.com

    # Restrict delivery channels
    engagespot send \"Invoice ready\" --recipient alice@example.com --channel email

    # Activate a user before their first login, signing the request
    engagespot --hmac connect alice@example.com

    # Print the HMAC signature for a user id
    engagespot sign alice@example.com
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// TOML file with [engagespot], [http] and [logger] sections.
    /// Environment variables still take precedence over its values.
    ///
    /// Example: --config /etc/engagespot/engagespot.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    ///
    /// Raises log output to debug level.
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only.
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Sign user-connect requests with HMAC regardless of configuration
    #[arg(long)]
    pub hmac: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a notification
    ///
    /// All recipients are delivered in a single request. The HTTP status and
    /// response body are printed as returned by Engagespot.
    ///
    /// Examples:
    ///   engagespot send "Hello" --recipient alice@example.com
    ///   engagespot send "Hello" -r a@example.com -r b@example.com --category greetings
    Send {
        /// Notification title
        #[arg(value_name = "TITLE", value_parser = super::validation::validate_non_empty)]
        title: String,

        /// Recipient identifier, repeatable
        #[arg(short, long = "recipient", value_name = "ID", required = true)]
        recipients: Vec<String>,

        /// Notification body
        #[arg(short, long)]
        message: Option<String>,

        /// URL opened when the notification is clicked
        #[arg(long)]
        url: Option<String>,

        /// Icon URL
        #[arg(long)]
        icon: Option<String>,

        /// Notification category; created on the fly if unknown
        #[arg(long)]
        category: Option<String>,

        /// Delivery channel override, repeatable
        #[arg(long = "channel", value_name = "NAME")]
        channels: Vec<String>,
    },

    /// Activate a user without a manual login
    ///
    /// Marks the user as active on Engagespot so notifications can reach them
    /// before their first login.
    Connect {
        /// User identifier
        #[arg(value_name = "USER_ID", value_parser = super::validation::validate_non_empty)]
        user_id: String,
    },

    /// Print the HMAC signature for a user id
    ///
    /// Only the API secret is needed; nothing is sent over the network.
    Sign {
        /// User identifier
        #[arg(value_name = "USER_ID")]
        user_id: String,
    },
}

impl Cli {
    /// Log level implied by --verbose / --quiet, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}
