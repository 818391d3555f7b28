//! Inspect command: dump the parsed stub classes as JSON.
//!
//! Shows exactly what the parser recovered (raw annotation types, doc lines, the
//! constructor record) before any coercion or override is applied. Handy when
//! deciding which override-table entries a new stub release needs.

use crate::cli::InspectArgs;
use crate::commands::generate::collect_classes;
use crate::config::Config;
use anyhow::{Context, Result};
use std::path::Path;

pub fn run_inspect(args: &InspectArgs, root: &Path, verbose: bool) -> Result<()> {
    let config = Config::load(root);
    let stubs_dir = config.stubs_dir(args.source.stubs_dir.as_deref(), root)?;
    let exclude = args.source.exclude_patterns(&config.exclude);

    let classes = collect_classes(&stubs_dir, &exclude, verbose)?;
    let json = serde_json::to_string_pretty(&classes).context("Failed to serialize classes")?;
    println!("{}", json);

    Ok(())
}
