//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// Encore CLI - local-first audience feedback for live events
#[derive(Parser, Debug)]
#[command(name = "encore", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Store path (default: ~/.encore/encore.db)
    #[arg(long, global = true, env = "ENCORE_DB")]
    pub db: Option<PathBuf>,

    /// Event config file (default: ~/.encore/event.json if present)
    #[arg(long, global = true, env = "ENCORE_EVENT")]
    pub config: Option<PathBuf>,

    /// Output as JSON (for scripted integration)
    #[arg(long, global = true)]
    pub json: bool,

    /// Output only the record ID (for scripting)
    #[arg(long, global = true)]
    pub silent: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the local store
    Init {
        /// Overwrite an existing store
        #[arg(long)]
        force: bool,
    },

    /// Submit a feedback response
    Submit(SubmitArgs),

    /// Opt in an email address for event follow-up
    Optin {
        /// Email address (stored with explicit consent, separate from responses)
        email: String,
    },

    /// List stored responses
    List {
        /// Maximum responses to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Show per-axis tallies as bar charts
    Stats,

    /// Export stored records to CSV
    Export {
        /// Output file (default: concert_responses.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export the email opt-in list instead of responses
        #[arg(long)]
        emails: bool,
    },

    /// Clear all responses and opt-ins on this device
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Print this device's anonymous session id
    Session,
}

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Selections, one `<axis>=<label>` pair per configured axis
    /// (e.g. `mood=Happy story=Journey`)
    #[arg(required = true)]
    pub selections: Vec<String>,

    /// Free-text note (max 140 characters)
    #[arg(short, long)]
    pub note: Option<String>,

    /// Program segment this response refers to
    #[arg(short, long)]
    pub segment: Option<String>,
}
