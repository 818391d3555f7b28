//! Documentation comment extraction for stub files.
//!
//! Tracks `/** ... */` blocks line by line and pulls `@param` / `@return` annotations
//! out of them. The scanner holds at most one pending block; the declaration that
//! follows takes it.

use crate::parser::tokens::{comment_tokens, strip_braces};
use crate::types::DocBlock;

const BLOCK_OPEN: &str = "/**";
const BLOCK_CLOSE: &str = "*/";

/// Line-driven state machine over documentation blocks
#[derive(Debug, Default)]
pub struct DocCommentScanner {
    pending: Option<DocBlock>,
    in_block: bool,
}

impl DocCommentScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one trimmed line. Returns true when the line belongs to a comment block
    /// and must not be scanned for declarations.
    pub fn feed(&mut self, line: &str) -> bool {
        if line.starts_with(BLOCK_OPEN) {
            self.pending = Some(DocBlock {
                lines: vec![line.to_string()],
                ..DocBlock::default()
            });
            // `/** one-liner */`
            self.in_block = !line[BLOCK_OPEN.len()..].contains(BLOCK_CLOSE);
            return true;
        }

        if !self.in_block {
            return false;
        }

        let closing = line.starts_with(BLOCK_CLOSE);
        if let Some(block) = self.pending.as_mut() {
            block.lines.push(line.to_string());
            if !closing {
                record_annotation(block, line);
            }
        }
        if closing {
            self.in_block = false;
        }
        true
    }

    /// Whether the scanner is between an opening and a closing marker
    pub fn in_block(&self) -> bool {
        self.in_block
    }

    /// Hand the most recent block to the declaration that follows it
    pub fn take(&mut self) -> Option<DocBlock> {
        self.pending.take()
    }
}

/// Record `@return {type} ...` and `@param {type} name ...` annotations.
/// Only lines between the delimiters are passed here.
fn record_annotation(block: &mut DocBlock, line: &str) {
    let tokens = comment_tokens(line);
    if tokens.len() < 3 {
        return;
    }

    let tag = tokens[0];
    if tag.starts_with("@return") {
        block.return_type = Some(strip_braces(tokens[1]));
    } else if tag.starts_with("@param") {
        block
            .param_types
            .insert(tokens[2].to_string(), strip_braces(tokens[1]));
    }
}

/// Parse a complete comment text into a DocBlock (used by tests and tooling)
pub fn parse_doc_block(text: &str) -> Option<DocBlock> {
    let mut scanner = DocCommentScanner::new();
    for line in text.lines() {
        scanner.feed(line.trim());
    }
    scanner.take()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_and_return_annotations() {
        let block = parse_doc_block(
            r#"/**
 * Scrolls the note grid.
 *
 * @param {int} offset the number of keys
 * @param {boolean} fast scroll by pages
 * @return {Clip} the clip itself
 */"#,
        )
        .unwrap();

        assert_eq!(block.lines.len(), 7);
        assert_eq!(block.lines[0], "/**");
        assert_eq!(block.lines[1], "* Scrolls the note grid.");
        assert_eq!(block.lines[6], "*/");
        assert_eq!(block.param_type("offset"), Some("int"));
        assert_eq!(block.param_type("fast"), Some("boolean"));
        assert_eq!(block.return_type.as_deref(), Some("Clip"));
    }

    #[test]
    fn test_short_annotation_lines_are_ignored() {
        // Fewer than three tokens: no type recorded
        let block = parse_doc_block("/**\n * @returns {boolean}\n * @param x\n */").unwrap();
        assert_eq!(block.return_type, None);
        assert!(block.param_types.is_empty());
        assert_eq!(block.lines.len(), 4);
    }

    #[test]
    fn test_block_without_annotations_is_passthrough() {
        let block = parse_doc_block("/**\n * Just prose.\n */").unwrap();
        assert_eq!(block.lines, vec!["/**", "* Just prose.", "*/"]);
        assert_eq!(block.return_type, None);
        assert!(block.param_types.is_empty());
    }

    #[test]
    fn test_later_block_replaces_earlier() {
        let mut scanner = DocCommentScanner::new();
        for line in ["/**", "* @param {int} a first", "*/", "/**", "* second", "*/"] {
            scanner.feed(line);
        }
        let block = scanner.take().unwrap();
        assert_eq!(block.lines, vec!["/**", "* second", "*/"]);
        assert!(block.param_types.is_empty());
        assert!(scanner.take().is_none());
    }

    #[test]
    fn test_single_line_block_closes() {
        let mut scanner = DocCommentScanner::new();
        assert!(scanner.feed("/** Marker interface. */"));
        assert!(!scanner.in_block());
        assert!(!scanner.feed("function Marker() {}"));
        assert_eq!(scanner.take().unwrap().lines, vec!["/** Marker interface. */"]);
    }

    #[test]
    fn test_lines_outside_blocks_are_not_consumed() {
        let mut scanner = DocCommentScanner::new();
        assert!(!scanner.feed("Clip.prototype.play = function() {};"));
        assert!(!scanner.feed("*/"));
        assert!(scanner.take().is_none());
    }

    #[test]
    fn test_delimiter_lines_carry_no_annotations() {
        let block = parse_doc_block("/** @return {int} count */").unwrap();
        assert_eq!(block.return_type, None);

        let block = parse_doc_block("/**\n * prose\n */ @param {int} x trailing").unwrap();
        assert!(block.param_types.is_empty());
        assert_eq!(block.lines.len(), 3);
    }

    #[test]
    fn test_repeated_param_last_wins() {
        let block =
            parse_doc_block("/**\n * @param {int} x one\n * @param {double} x two\n */").unwrap();
        assert_eq!(block.param_type("x"), Some("double"));
    }
}
