use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::DEFAULT_LOG_LEVEL;

#[derive(Parser, Debug)]
#[command(name = "recordwise")]
#[command(about = "AI-assisted student record supplement form")]
#[command(version)]
pub struct Args {
    /// Credential file to read (defaults to ~/Documents/test.env)
    #[arg(long, value_name = "PATH", global = true)]
    pub env_file: Option<PathBuf>,

    /// Suppress status messages and the progress spinner
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Diagnostic log filter written to stderr (e.g. debug, recordwise=trace)
    #[arg(long, value_name = "LEVEL", default_value = DEFAULT_LOG_LEVEL, global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive record form (default)
    Form,
    /// List the competency labels offered by the form
    Competencies,
}
