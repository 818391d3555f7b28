//! @dose
//! purpose: This module defines the command-line interface for stub2dts using the clap derive
//!     macros. It specifies the commands (generate, inspect) and their arguments.
//!
//! when-editing:
//!     - !Each command struct must derive Args and be added to the Commands enum
//!     - !Global flags (root, verbose) are defined on Cli and propagate to all subcommands
//!     - Flags only ever switch features off; the config file supplies the defaults
//!
//! invariants:
//!     - PathBuf is used for all file/directory path arguments
//!     - STUBS_DIR is optional; config and platform defaults fill it in
//!
//! gotchas:
//!     - The --root flag is global but optional; defaults to current directory in main.rs
//!     - --no-comments / --no-types override stub2dts.toml, never the other way round

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stub2dts")]
#[command(
    author,
    version,
    about = "Convert Bitwig controller-API JavaScript stubs into a TypeScript declaration file"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (defaults to current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the TypeScript declaration file from the stubs
    Generate(GenerateArgs),

    /// Print the parsed stub classes as JSON
    Inspect(InspectArgs),
}

/// Options shared by generate and inspect
#[derive(Args, Clone, Default)]
pub struct SourceOptions {
    /// Directory containing the JavaScript stubs (defaults to config, then platform path)
    #[arg(value_name = "STUBS_DIR")]
    pub stubs_dir: Option<PathBuf>,

    /// Skip stub files whose name matches glob pattern (can be repeated)
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,
}

impl SourceOptions {
    /// Exclude patterns from the config file followed by the --exclude flags
    pub fn exclude_patterns(&self, config_patterns: &[String]) -> Vec<String> {
        let mut patterns = config_patterns.to_vec();
        patterns.extend(self.exclude.clone());
        patterns
    }
}

#[derive(Args, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceOptions,

    /// Output file (defaults to BitwigControllerApi.d.ts in the root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Don't copy doc comments into the declarations
    #[arg(long)]
    pub no_comments: bool,

    /// Don't emit parameter and return type annotations
    #[arg(long)]
    pub no_types: bool,

    /// Ignore the compiled-in override tables (config overrides still apply)
    #[arg(long)]
    pub no_builtin_overrides: bool,

    /// Dry run - print the declarations instead of writing the file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Default)]
pub struct InspectArgs {
    #[command(flatten)]
    pub source: SourceOptions,
}
