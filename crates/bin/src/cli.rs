//! CLI argument definitions for the datapath binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Query and transform nested JSON documents by dotted path
#[derive(Parser, Debug)]
#[command(name = "datapath")]
#[command(about = "Query and transform nested JSON documents by dotted path")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path
    Get(GetArgs),
    /// Set the value at a path, writing the document back
    Set(SetArgs),
    /// Remove the value at a path, writing the document back
    Remove(RemoveArgs),
    /// Print the document as a single-level path-to-leaf mapping
    Flatten(FlattenArgs),
    /// Validate a document against a schema document
    Validate(ValidateArgs),
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// JSON document to read
    #[arg(env = "DATAPATH_FILE")]
    pub file: PathBuf,

    /// Dotted path to the value
    pub path: String,

    /// Print a fallback instead of failing when the path is absent
    #[arg(short, long)]
    pub default: Option<String>,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// JSON document to modify
    #[arg(env = "DATAPATH_FILE")]
    pub file: PathBuf,

    /// Dotted path to write
    pub path: String,

    /// Value to write, parsed as JSON (falls back to a plain string)
    pub value: String,

    /// Print the updated document instead of writing the file
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the remove command
#[derive(clap::Args, Debug)]
pub struct RemoveArgs {
    /// JSON document to modify
    #[arg(env = "DATAPATH_FILE")]
    pub file: PathBuf,

    /// Dotted path to remove
    pub path: String,

    /// Print the updated document instead of writing the file
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the flatten command
#[derive(clap::Args, Debug)]
pub struct FlattenArgs {
    /// JSON document to flatten
    #[arg(env = "DATAPATH_FILE")]
    pub file: PathBuf,
}

/// Arguments for the validate command
#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// JSON document to validate
    #[arg(env = "DATAPATH_FILE")]
    pub file: PathBuf,

    /// JSON schema document (structure mirrors the data; leaves are type
    /// names)
    pub schema: PathBuf,
}
