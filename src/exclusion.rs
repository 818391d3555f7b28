//! @dose
//! purpose: Enumerates the stub files of the stubs directory, honouring exclude patterns
//!     from stub2dts.toml and the --exclude flag.
//!
//! when-editing:
//!     - !Only the top level of the stubs directory is listed; subdirectories are skipped
//!     - Patterns are matched against the file name, not the full path
//!
//! invariants:
//!     - Files are returned sorted by file name so output order is reproducible
//!     - Only regular files (or symlinks to them) are returned; dangling links are skipped
//!     - Only a missing stubs directory is fatal; unreadable entries are warned about
//!
//! gotchas:
//!     - Hidden files are included; exclude them with a pattern such as ".*"

use anyhow::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Build a GlobSet from patterns; invalid patterns are reported and skipped
pub fn build_exclude_globset(patterns: &[String]) -> Option<GlobSet> {
    if patterns.is_empty() {
        return None;
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => {
                eprintln!("Warning: invalid exclude pattern '{}': {}", pattern, e);
            }
        }
    }

    builder.build().ok()
}

/// List the stub files directly inside `dir`, sorted by file name
pub fn collect_stub_files(dir: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Stubs directory not found: {}", dir.display());
    }

    let excluded = build_exclude_globset(exclude);
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            // Dangling symlink: not a regular file
            Err(e) if e.io_error().map(|io| io.kind()) == Some(ErrorKind::NotFound) => continue,
            Err(e) => {
                eprintln!("Warning: skipping entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(ref set) = excluded {
            if set.is_match(entry.file_name()) {
                continue;
            }
        }
        files.push(entry.into_path());
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collect_sorted_files_only() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Transport.js"), "").unwrap();
        fs::write(temp_dir.path().join("Clip.js"), "").unwrap();
        fs::write(temp_dir.path().join("Action.js"), "").unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();
        fs::write(temp_dir.path().join("nested/Hidden.js"), "").unwrap();

        let files = collect_stub_files(temp_dir.path(), &[]).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Action.js", "Clip.js", "Transport.js"]);
    }

    #[test]
    fn test_collect_with_exclusions() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Clip.js"), "").unwrap();
        fs::write(temp_dir.path().join("README.md"), "").unwrap();
        fs::write(temp_dir.path().join("Clip.js.bak"), "").unwrap();

        let files =
            collect_stub_files(temp_dir.path(), &["*.md".to_string(), "*.bak".to_string()])
                .unwrap();
        assert_eq!(files, vec![temp_dir.path().join("Clip.js")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Clip.js"), "").unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("Removed.js"),
            temp_dir.path().join("Stale.js"),
        )
        .unwrap();

        let files = collect_stub_files(temp_dir.path(), &[]).unwrap();
        assert_eq!(files, vec![temp_dir.path().join("Clip.js")]);
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = collect_stub_files(&temp_dir.path().join("nope"), &[]).unwrap_err();
        assert!(err.to_string().contains("Stubs directory not found"));
    }

    #[test]
    fn test_build_exclude_globset() {
        assert!(build_exclude_globset(&[]).is_none());

        let set = build_exclude_globset(&["*.md".to_string(), "[invalid".to_string()]).unwrap();
        assert!(set.is_match("README.md"));
        assert!(!set.is_match("Clip.js"));
    }
}
