//! @dose
//! purpose: stub2dts binary. Reads the global --root/--verbose flags and hands the
//!     subcommand to `generate` (write BitwigControllerApi.d.ts) or `inspect` (dump the
//!     parsed stubs as JSON).
//!
//! when-editing:
//!     - !--root is where stub2dts.toml and relative stub/output paths are looked up
//!
//! invariants:
//!     - Failures print `Error: <context chain>` on stderr and exit with status 1

use anyhow::Context;
use clap::Parser;
use std::env;
use stub2dts::cli::{Cli, Commands};
use stub2dts::commands::{run_generate, run_inspect};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let root = match cli.root {
        Some(root) => root,
        None => env::current_dir().context("Failed to get current directory")?,
    };

    match cli.command {
        Commands::Generate(args) => run_generate(&args, &root, cli.verbose),
        Commands::Inspect(args) => run_inspect(&args, &root, cli.verbose),
    }
}
