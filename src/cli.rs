//! Command-line argument definitions.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the INI tool.
#[derive(Parser, Debug)]
#[command(
    name = "inifile",
    about = "Parse, query and edit INI configuration files",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Silently drop entries that appear before any section header
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Read parser options from a TOML file
    #[arg(long, global = true, value_name = "FILE")]
    pub options: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List section names, or export all sections as JSON
    Sections(SectionsOpts),
    /// Print the value of a key
    Get(GetOpts),
    /// Set a key, creating the section if needed, and write the file back
    Set(SetOpts),
    /// Rewrite a file in canonical form
    Fmt(FmtOpts),
    /// Print version information
    Version,
}

/// Options for the `sections` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct SectionsOpts {
    /// INI file to read
    pub file: PathBuf,

    /// Print every section with its entries as a JSON object
    #[arg(long)]
    pub json: bool,
}

/// Options for the `get` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct GetOpts {
    /// INI file to read
    pub file: PathBuf,
    /// Section name
    pub section: String,
    /// Key within the section
    pub key: String,
}

/// Options for the `set` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct SetOpts {
    /// INI file to edit
    pub file: PathBuf,
    /// Section name
    pub section: String,
    /// Key within the section
    pub key: String,
    /// New value
    pub value: String,

    /// Write the result here instead of back to FILE
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Options for the `fmt` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct FmtOpts {
    /// INI file to format
    pub file: PathBuf,

    /// Write the result here instead of back to FILE
    #[arg(short, long, value_name = "PATH", conflicts_with = "check")]
    pub output: Option<PathBuf>,

    /// Only check whether FILE is already canonical; write nothing
    #[arg(long)]
    pub check: bool,
}
