//! CLI command definitions for the `askb` binary.
//!
//! Uses clap derive macros. Resource commands follow a noun-verb pattern
//! (e.g., `askb questions list`, `askb answers show <ID>`).

pub mod answers;
pub mod input;
pub mod questions;
pub mod session;
pub mod upload;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Browse and manage questions and answers on an Askboard server.
#[derive(Parser)]
#[command(name = "askb", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// API base URL, overriding config.toml and ASKBOARD_API_URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Where the bearer token is kept.
    #[arg(long, global = true, value_enum, default_value_t = StoreKind::File)]
    pub store: StoreKind,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// OS keychain (macOS Keychain, Secret Service, Windows Credential Manager).
    Keychain,
    /// `credentials.json` in the data directory.
    File,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Work with questions.
    #[command(alias = "q")]
    Questions {
        #[command(subcommand)]
        action: QuestionAction,
    },

    /// Work with answers.
    #[command(alias = "a")]
    Answers {
        #[command(subcommand)]
        action: AnswerAction,
    },

    /// Sign in and store the returned token.
    Login {
        #[arg(long)]
        email: Option<String>,

        /// Password (prompted for when omitted).
        #[arg(long)]
        password: Option<String>,
    },

    /// Create an account and sign in with it.
    Register {
        /// Register an administrator instead of a regular user.
        #[arg(long)]
        admin: bool,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        password: Option<String>,

        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        display_name: Option<String>,
    },

    /// Show the user owning the stored token.
    Whoami,

    /// Forget the stored token.
    Logout,

    /// Upload a file as multipart form data (field `File`).
    Upload {
        /// API path to post to (e.g., /photos).
        path: String,

        /// File to send.
        file: PathBuf,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum QuestionAction {
    /// List questions matching filter parameters.
    #[command(alias = "ls")]
    List {
        /// Filter parameter as key=value (repeatable).
        #[arg(long = "param", short = 'p')]
        params: Vec<String>,
    },

    /// Show one question.
    Show { id: String },

    /// Create a question from a JSON file (`-` reads stdin).
    Create {
        #[arg(long, short = 'f')]
        file: PathBuf,
    },

    /// Update a question from a JSON file; the JSON must include `_id`.
    Update {
        #[arg(long, short = 'f')]
        file: PathBuf,
    },

    /// Delete a question.
    #[command(alias = "rm")]
    Delete { id: String },

    /// Attend a question.
    Attend { id: String },

    /// Stop attending a question.
    Unattend { id: String },
}

#[derive(Subcommand)]
pub enum AnswerAction {
    /// List answers matching query parameters.
    #[command(alias = "ls")]
    List {
        /// Query parameter as key=value (repeatable).
        #[arg(long = "param", short = 'p')]
        params: Vec<String>,
    },

    /// Show one answer.
    Show { id: String },

    /// Create an answer from a JSON file (`-` reads stdin).
    Create {
        #[arg(long, short = 'f')]
        file: PathBuf,
    },

    /// Update an answer from a JSON file; the JSON must include `_id`.
    Update {
        #[arg(long, short = 'f')]
        file: PathBuf,
    },

    /// Delete an answer.
    #[command(alias = "rm")]
    Delete { id: String },
}
