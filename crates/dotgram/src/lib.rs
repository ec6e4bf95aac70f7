use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod cmd_check;
pub mod cmd_dump;
pub mod utils;

// ---------------------------------------------------------------------------------------------------------------------
// Opt
// ---------------------------------------------------------------------------------------------------------------------

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Opt {
    /// No output printed to stdout
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Use verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Check(OptCheck),
    Dump(OptDump),
}

/// Build the grammar table and check nested group references
#[derive(Args)]
pub struct OptCheck {
    /// Schema modules in merge order (default: modules of Dotgram.toml)
    pub modules: Vec<PathBuf>,
}

/// Build the grammar table and print it
#[derive(Args)]
pub struct OptDump {
    /// Schema modules in merge order (default: modules of Dotgram.toml)
    pub modules: Vec<PathBuf>,

    /// output group table
    #[arg(long)]
    pub groups: bool,

    /// output referenced group kinds
    #[arg(long)]
    pub required: bool,
}
