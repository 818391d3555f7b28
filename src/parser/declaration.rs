//! @dose
//! purpose: Recognizes the three declaration shapes of a stub file (class function,
//!     prototype assignment, prototype member) and accumulates them into a ClassRecord.
//!
//! when-editing:
//!     - !The member prefix `<Class>.prototype.` must be tested before the constructor
//!       prefix `<Class>.prototype`, which it contains
//!     - !Every declaration takes the pending doc block so it cannot leak to the next one
//!
//! invariants:
//!     - The first `function` declaration in a file fixes the class; later ones are ignored
//!     - Member lines with three or fewer tokens never produce a MethodRecord
//!     - Constructor records never land in ClassRecord.methods
//!
//! gotchas:
//!     - Token positions are fixed: [Class, prototype, name, function, params...]
//!     - `Class.prototype = new Parent();` puts the superclass at token 3

use crate::parser::doc_comment::DocCommentScanner;
use crate::parser::tokens::{declaration_tokens, word_tokens};
use crate::types::{ClassRecord, DocBlock, MethodRecord, ParameterRecord};
use std::path::Path;
use thiserror::Error;

const CLASS_MARKER: &str = "function";
const IGNORED_MARKER: &str = "var";
const CONSTRUCTOR_NAME: &str = "constructor";

/// Non-fatal problems found while scanning declarations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeclarationError {
    #[error("malformed member declaration, expected `{class}.prototype.<name> = function(...)`: {line}")]
    MalformedMember { class: String, line: String },
}

/// The class a file declares, once its `function` line has been seen
#[derive(Debug)]
struct ActiveClass {
    name: String,
    member_prefix: String,
    constructor_prefix: String,
    comments: Vec<String>,
}

/// Accumulates declarations of one stub file
#[derive(Debug, Default)]
pub struct DeclarationScanner {
    class: Option<ActiveClass>,
    superclass: Option<String>,
    methods: Vec<MethodRecord>,
    constructor: Option<MethodRecord>,
}

impl DeclarationScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the class declared so far, if any
    pub fn class_name(&self) -> Option<&str> {
        self.class.as_ref().map(|c| c.name.as_str())
    }

    /// Scan one trimmed line that lies outside any comment block
    pub fn feed(&mut self, line: &str, docs: &mut DocCommentScanner) -> Result<(), DeclarationError> {
        if line.starts_with(IGNORED_MARKER) {
            return Ok(());
        }

        if line.starts_with(CLASS_MARKER) {
            if self.class.is_none() {
                self.declare_class(line, docs);
            }
            return Ok(());
        }

        let Some(class) = self.class.as_ref() else {
            return Ok(());
        };

        if line.starts_with(&class.member_prefix) {
            let doc = docs.take().unwrap_or_default();
            let tokens = declaration_tokens(line);
            if tokens.len() <= 3 {
                return Err(DeclarationError::MalformedMember {
                    class: class.name.clone(),
                    line: line.to_string(),
                });
            }
            self.add_member(&tokens, &doc);
        } else if line.starts_with(&class.constructor_prefix) {
            let doc = docs.take().unwrap_or_default();
            let tokens = declaration_tokens(line);
            if tokens.len() > 3 {
                self.superclass = Some(tokens[3].to_string());
                self.constructor = Some(build_method(CONSTRUCTOR_NAME, &tokens[3..], &doc, true));
            }
        }

        Ok(())
    }

    fn declare_class(&mut self, line: &str, docs: &mut DocCommentScanner) {
        let words = word_tokens(line);
        let Some(name) = words.get(1) else {
            return;
        };

        let comments = docs.take().map(|doc| doc.lines).unwrap_or_default();
        self.class = Some(ActiveClass {
            name: name.to_string(),
            member_prefix: format!("{}.prototype.", name),
            constructor_prefix: format!("{}.prototype", name),
            comments,
        });
    }

    fn add_member(&mut self, tokens: &[&str], doc: &DocBlock) {
        let name = tokens[2];
        if name == CONSTRUCTOR_NAME {
            self.constructor = Some(build_method(name, &tokens[3..], doc, true));
        } else {
            self.methods.push(build_method(name, &tokens[4..], doc, false));
        }
    }

    /// Close the file; None when no class declaration was found
    pub fn finish(self, source: &Path) -> Option<ClassRecord> {
        let class = self.class?;
        Some(ClassRecord {
            name: class.name,
            superclass: self.superclass,
            comments: class.comments,
            methods: self.methods,
            constructor: self.constructor,
            source: source.to_path_buf(),
        })
    }
}

fn build_method(name: &str, params: &[&str], doc: &DocBlock, constructor: bool) -> MethodRecord {
    MethodRecord {
        name: name.to_string(),
        parameters: params
            .iter()
            .map(|param| ParameterRecord {
                name: param.to_string(),
                raw_type: doc.param_type(param).map(str::to_string),
            })
            .collect(),
        return_type: doc.return_type.clone(),
        comments: doc.lines.clone(),
        constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(lines: &[&str]) -> (Option<ClassRecord>, Vec<DeclarationError>) {
        let mut docs = DocCommentScanner::new();
        let mut scanner = DeclarationScanner::new();
        let mut errors = Vec::new();
        for line in lines {
            let line = line.trim();
            if docs.feed(line) {
                continue;
            }
            if let Err(e) = scanner.feed(line, &mut docs) {
                errors.push(e);
            }
        }
        (scanner.finish(Path::new("Stub.js")), errors)
    }

    #[test]
    fn test_class_and_method() {
        let (class, errors) = scan(&[
            "function Clip() {}",
            "/**",
            " * @param {int} x",
            " */",
            "Clip.prototype.method = function (x) {};",
        ]);
        let class = class.unwrap();
        assert!(errors.is_empty());
        assert_eq!(class.name, "Clip");
        assert_eq!(class.methods.len(), 1);
        assert_eq!(class.methods[0].name, "method");
        assert_eq!(
            class.methods[0].parameters,
            vec![ParameterRecord {
                name: "x".to_string(),
                raw_type: Some("int".to_string())
            }]
        );
        assert_eq!(class.methods[0].comments.len(), 3);
    }

    #[test]
    fn test_superclass_from_prototype_assignment() {
        let (class, _) = scan(&["function Track() {}", "Track.prototype = new Channel();"]);
        let class = class.unwrap();
        assert_eq!(class.superclass.as_deref(), Some("Channel"));
        assert!(class.methods.is_empty());

        let constructor = class.constructor.unwrap();
        assert!(constructor.constructor);
        assert_eq!(constructor.parameters[0].name, "Channel");
    }

    #[test]
    fn test_constructor_member_is_not_a_method() {
        let (class, _) = scan(&[
            "function Track() {}",
            "Track.prototype.constructor = Track;",
            "Track.prototype.stop = function() {};",
        ]);
        let class = class.unwrap();
        assert_eq!(class.methods.len(), 1);
        assert_eq!(class.methods[0].name, "stop");
        assert!(class.constructor.is_some());
        assert_eq!(class.superclass, None);
    }

    #[test]
    fn test_malformed_member_is_reported_and_skipped() {
        let (class, errors) = scan(&[
            "function Clip() {}",
            "Clip.prototype.broken;",
            "Clip.prototype.play = function() {};",
        ]);
        assert_eq!(
            errors,
            vec![DeclarationError::MalformedMember {
                class: "Clip".to_string(),
                line: "Clip.prototype.broken;".to_string(),
            }]
        );
        let class = class.unwrap();
        assert_eq!(class.methods.len(), 1);
        assert_eq!(class.methods[0].name, "play");
    }

    #[test]
    fn test_first_class_declaration_wins() {
        let (class, _) = scan(&[
            "function Clip() {}",
            "function helper() {}",
            "Clip.prototype.play = function() {};",
            "helper.prototype.run = function() {};",
        ]);
        let class = class.unwrap();
        assert_eq!(class.name, "Clip");
        assert_eq!(class.methods.len(), 1);
    }

    #[test]
    fn test_class_comment_captured() {
        let (class, _) = scan(&["/**", " * A clip.", " */", "function Clip() {}"]);
        assert_eq!(class.unwrap().comments, vec!["/**", "* A clip.", "*/"]);
    }

    #[test]
    fn test_doc_block_consumed_once() {
        let (class, _) = scan(&[
            "function Clip() {}",
            "/**",
            " * @return {int} the count",
            " */",
            "Clip.prototype.count = function() {};",
            "Clip.prototype.play = function() {};",
        ]);
        let class = class.unwrap();
        assert_eq!(class.methods[0].return_type.as_deref(), Some("int"));
        assert_eq!(class.methods[1].return_type, None);
        assert!(class.methods[1].comments.is_empty());
    }

    #[test]
    fn test_no_class_declaration() {
        let (class, _) = scan(&["var x = 1;", "Clip.prototype.play = function() {};"]);
        assert!(class.is_none());
    }

    #[test]
    fn test_var_lines_ignored() {
        let (class, _) = scan(&["var functionTable = {};", "function Clip() {}"]);
        assert_eq!(class.unwrap().name, "Clip");
    }
}
