//! Command-line interface definitions for refdoc

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output form for the convert command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EmitArg {
    /// reStructuredText markup
    Rst,
    /// Document-tree AST as JSON
    Ast,
}

/// CLI structure for the refdoc application
#[derive(Parser)]
#[command(name = "refdoc")]
#[command(version)]
#[command(about = "API reference documentation migration tool", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for refdoc
#[derive(Subcommand)]
pub enum Commands {
    /// Convert one API reference page to markup
    Convert {
        /// Page URL or path to a saved HTML file
        source: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output form (markup or document-tree JSON)
        #[arg(long, value_enum, default_value = "rst")]
        emit: EmitArg,

        /// Template profile file (defaults are used when omitted)
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write a default refdoc.toml template profile
    InitProfile {
        /// Where to write the profile (defaults to ./refdoc.toml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
