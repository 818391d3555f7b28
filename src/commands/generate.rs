//! @dose
//! purpose: This module implements the generate command: parse every stub file, resolve
//!     signatures against the override tables and write the TypeScript declaration file.
//!
//! when-editing:
//!     - !All stub files are parsed before anything is written; the output is written once
//!     - !CLI toggles are folded into the Config before anything reads it
//!     - Override suggestions and parse warnings go to stderr, never into the output
//!
//! invariants:
//!     - Output order follows the sorted stub file list
//!     - Identical input, config and flags produce a byte-identical file
//!     - An unreadable stub file aborts the whole run
//!
//! do-not:
//!     - Never write a partial declaration file
//!
//! flows:
//!     - Collect: list stub files, parse each, report diagnostics
//!     - Resolve: coerce types, apply overrides, gather suggestions
//!     - Format: header + one interface per class, then write (or print on --dry-run)

use crate::cli::GenerateArgs;
use crate::config::{self, Config};
use crate::exclusion::collect_stub_files;
use crate::formatter::{format_declarations, RenderOptions};
use crate::parser::parse_stub_file;
use crate::resolver::{ResolvedClass, Resolver};
use crate::types::ClassRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn run_generate(args: &GenerateArgs, root: &Path, verbose: bool) -> Result<()> {
    let mut config = Config::load(root);
    apply_flags(&mut config, args);

    let stubs_dir = config.stubs_dir(args.source.stubs_dir.as_deref(), root)?;
    let exclude = args.source.exclude_patterns(&config.exclude);
    let classes = collect_classes(&stubs_dir, &exclude, verbose)?;

    let tables = config.override_tables();
    if verbose {
        eprintln!(
            "Using {} parameter and {} method overrides",
            tables.parameter_count(),
            tables.method_count()
        );
    }

    let options = RenderOptions {
        with_comments: config.with_comments,
        with_types: config.with_types,
    };
    let resolver = Resolver::new(&tables, options.with_types);

    let mut suggestions = Vec::new();
    let resolved: Vec<ResolvedClass> = classes
        .iter()
        .map(|class| resolver.resolve_class(class, &mut suggestions))
        .collect();

    if !suggestions.is_empty() {
        eprintln!(
            "Callbacks without a signature (add to [parameters] in {}):",
            config::CONFIG_FILE
        );
        for suggestion in &suggestions {
            eprintln!("    {}", suggestion);
        }
    }

    let content = format_declarations(&resolved, options);

    let output = config::resolve(root, args.output.as_deref().unwrap_or(config.output.as_path()));
    if args.dry_run {
        if verbose {
            eprintln!("Would write to: {}", output.display());
        }
        print!("{}", content);
        return Ok(());
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(&output, content)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Created TypeScript definition file: {} ({} interfaces)",
        output.display(),
        resolved.len()
    );

    Ok(())
}

/// Fold command-line switches into the loaded config
fn apply_flags(config: &mut Config, args: &GenerateArgs) {
    if args.no_comments {
        config.with_comments = false;
    }
    if args.no_types {
        config.with_types = false;
    }
    if args.no_builtin_overrides {
        config.builtin_overrides = false;
    }
}

/// Parse every stub file in `stubs_dir`; files without a class declaration are skipped
pub fn collect_classes(
    stubs_dir: &Path,
    exclude: &[String],
    verbose: bool,
) -> Result<Vec<ClassRecord>> {
    let files = collect_stub_files(stubs_dir, exclude)?;

    if verbose {
        eprintln!(
            "Reading {} stub files from {}",
            files.len(),
            stubs_dir.display()
        );
    }

    let mut classes = Vec::with_capacity(files.len());
    for path in &files {
        let parsed = parse_stub_file(path)?;

        for diagnostic in &parsed.diagnostics {
            eprintln!("Warning: {}", diagnostic);
        }

        match parsed.class {
            Some(class) => classes.push(class),
            None => {
                if verbose {
                    eprintln!("Skipping {} (no class declaration)", path.display());
                }
            }
        }
    }

    Ok(classes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SourceOptions;
    use tempfile::TempDir;

    const TRACK_STUB: &str = r#"/**
 * A track.
 */
function Track() {}

Track.prototype = new Channel();

/**
 * @param {int} index the slot
 * @return {ClipLauncherSlot} the slot
 */
Track.prototype.getSlot = function(index) {};

/**
 * @param {function} callback called on change
 */
Track.prototype.addIsGroupObserver = function(callback) {};
"#;

    fn write_stubs(dir: &Path) {
        fs::write(dir.join("Track.js"), TRACK_STUB).unwrap();
        fs::write(dir.join("Action.js"), "function Action() {}\n").unwrap();
        fs::write(dir.join("notes.txt"), "no class here\n").unwrap();
    }

    fn args_for(stubs: &Path) -> GenerateArgs {
        GenerateArgs {
            source: SourceOptions {
                stubs_dir: Some(stubs.to_path_buf()),
                exclude: Vec::new(),
            },
            ..GenerateArgs::default()
        }
    }

    #[test]
    fn test_collect_classes_skips_files_without_class() {
        let temp_dir = TempDir::new().unwrap();
        write_stubs(temp_dir.path());

        let classes = collect_classes(temp_dir.path(), &[], false).unwrap();
        let names: Vec<&str> = classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Action", "Track"]);
    }

    #[test]
    fn test_run_generate_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let stubs = temp_dir.path().join("stubs");
        fs::create_dir(&stubs).unwrap();
        write_stubs(&stubs);

        run_generate(&args_for(&stubs), temp_dir.path(), false).unwrap();

        let output = fs::read_to_string(temp_dir.path().join(config::DEFAULT_OUTPUT)).unwrap();
        assert!(output.starts_with("declare function loadAPI(val: number): void;\n"));
        assert!(output.contains("interface Action {\n\n}\n\n"));
        assert!(output.contains("interface Track extends Channel {\n"));
        assert!(output.contains("     getSlot(index : number) : ClipLauncherSlot,\n"));
        assert!(output.contains("     addIsGroupObserver(callback : (group: boolean) => void) : void\n}"));
        assert!(output.find("interface Action").unwrap() < output.find("interface Track").unwrap());
    }

    #[test]
    fn test_run_generate_without_types_or_comments() {
        let temp_dir = TempDir::new().unwrap();
        write_stubs(temp_dir.path());

        let mut args = args_for(temp_dir.path());
        args.no_types = true;
        args.no_comments = true;
        args.output = Some("out/plain.d.ts".into());
        run_generate(&args, temp_dir.path(), false).unwrap();

        let output = fs::read_to_string(temp_dir.path().join("out/plain.d.ts")).unwrap();
        assert!(output.contains("     getSlot(index),\n     addIsGroupObserver(callback)}\n"));
        assert!(!output.contains("* A track."));
        assert!(!output.contains(" : number"));
    }

    #[test]
    fn test_run_generate_missing_stub_dir() {
        let temp_dir = TempDir::new().unwrap();
        let args = args_for(&temp_dir.path().join("missing"));
        assert!(run_generate(&args, temp_dir.path(), false).is_err());
    }
}
