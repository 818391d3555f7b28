//! @dose
//! purpose: Core record types produced by the stub parser and consumed by the resolver
//!     and the declaration formatter. One ClassRecord per stub file that declares a class.
//!
//! when-editing:
//!     - !Declared types are stored raw (braces stripped only); coercion happens in resolver
//!     - !ClassRecord.methods never contains the constructor record
//!     - All types derive Serialize so `inspect` can dump them as JSON
//!
//! invariants:
//!     - DocBlock.param_types keys are unique parameter names (last @param wins)
//!     - MethodRecord.parameters keep source order
//!     - Comment lines are stored trimmed, delimiters included
//!
//! gotchas:
//!     - param_types is a BTreeMap so JSON output is stable across runs

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A documentation comment block (`/** ... */`) and the annotations found in it
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocBlock {
    /// Trimmed block lines, opening and closing markers included
    pub lines: Vec<String>,
    /// Type named by the last `@return` tag, braces stripped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    /// Parameter name -> declared type from `@param` tags
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub param_types: BTreeMap<String, String>,
}

impl DocBlock {
    /// Declared type for a parameter, if the block has a matching `@param`
    pub fn param_type(&self, name: &str) -> Option<&str> {
        self.param_types.get(name).map(|s| s.as_str())
    }
}

/// A formal parameter of a stub method
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterRecord {
    pub name: String,
    /// Declared type as written in the doc block (e.g. "int", "function")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_type: Option<String>,
}

/// A prototype method (or the constructor) of a stub class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodRecord {
    pub name: String,
    pub parameters: Vec<ParameterRecord>,
    /// Declared return type, raw
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    /// Doc block lines preceding the declaration
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub constructor: bool,
}

/// One class recovered from a stub file; rendered as one interface block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superclass: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
    pub methods: Vec<MethodRecord>,
    /// Parsed constructor declaration, kept for inspection only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor: Option<MethodRecord>,
    /// Stub file the class was read from
    pub source: PathBuf,
}

impl ClassRecord {
    /// Qualified path of a method, as used by the method override table
    pub fn method_path(&self, method: &str) -> String {
        format!("{}.{}", self.name, method)
    }
}
