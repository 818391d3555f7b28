//! @dose
//! purpose: Entry point of the stub parser. Runs the doc-comment scanner and the declaration
//!     scanner over each line of a stub file and returns the recovered ClassRecord together
//!     with any non-fatal diagnostics.
//!
//! when-editing:
//!     - !Lines inside a comment block are never scanned for declarations
//!     - !Diagnostics are advisory; only I/O and encoding problems are ParseErrors
//!
//! invariants:
//!     - One stub file yields at most one ClassRecord
//!     - Diagnostic line numbers are 1-based
//!
//! flows:
//!     - Read: parse_stub_file reads the whole file, then delegates to parse_stub
//!     - Scan: each trimmed line goes to DocCommentScanner first, then DeclarationScanner
//!     - Finish: the declaration scanner produces the ClassRecord (or None)

pub mod declaration;
pub mod doc_comment;
pub mod tokens;

use crate::types::ClassRecord;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use declaration::{DeclarationError, DeclarationScanner};
pub use doc_comment::{parse_doc_block, DocCommentScanner};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read stub file {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A non-fatal problem found in a stub file
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub line: usize,
    pub error: DeclarationError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.path.display(), self.line, self.error)
    }
}

/// Result of parsing a single stub file
#[derive(Debug, Default)]
pub struct ParsedStub {
    /// The declared class; None if the file has no class declaration
    pub class: Option<ClassRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse stub source text. `path` is only recorded, never read.
pub fn parse_stub(source: &str, path: &Path) -> ParsedStub {
    let mut docs = DocCommentScanner::new();
    let mut declarations = DeclarationScanner::new();
    let mut diagnostics = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if docs.feed(line) {
            continue;
        }
        if let Err(error) = declarations.feed(line, &mut docs) {
            diagnostics.push(Diagnostic {
                path: path.to_path_buf(),
                line: idx + 1,
                error,
            });
        }
    }

    ParsedStub {
        class: declarations.finish(path),
        diagnostics,
    }
}

/// Read and parse one stub file
pub fn parse_stub_file(path: &Path) -> Result<ParsedStub, ParseError> {
    let source = fs::read_to_string(path).map_err(|source| ParseError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_stub(&source, path))
}
