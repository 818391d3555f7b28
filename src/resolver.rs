//! @dose
//! purpose: Turns parsed stub records into render-ready signatures. Coerces Java-style
//!     annotation types to TypeScript and applies the override tables.
//!
//! when-editing:
//!     - !Overrides only apply when type annotations are enabled
//!     - !A method override replaces the whole parameter list; parameter overrides are then moot
//!     - Suggestions are diagnostics only and never change the resolved output
//!     - A `function` parameter gets a suggestion whenever no override was applied, including
//!       when types are off
//!
//! invariants:
//!     - coerce_type is pure and total
//!     - Suppressed parameters never reach the formatter
//!     - Constructor records are not resolved (ClassRecord.methods excludes them)
//!
//! gotchas:
//!     - A replaced parameter carries its whole `name : type` text in `name` and no type

use crate::overrides::{OverrideTables, ParamOverride};
use crate::types::{ClassRecord, MethodRecord};
use std::fmt;

/// TypeScript type for a `function` annotation
pub const FUNCTION_TYPE: &str = "() => void";

/// Map an annotation type to its TypeScript spelling
pub fn coerce_type(raw: &str) -> String {
    match raw {
        "function" => FUNCTION_TYPE.to_string(),
        "byte[]" => "number[]".to_string(),
        "int" | "double" | "long" | "byte" => "number".to_string(),
        other => other.to_string(),
    }
}

/// A parameter ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParam {
    /// Parameter name, or the full override text
    pub name: String,
    pub ty: Option<String>,
}

/// The text between a method's parentheses
#[derive(Debug, Clone, PartialEq)]
pub enum ParamList {
    /// Literal list from the method override table
    Literal(String),
    Params(Vec<ResolvedParam>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMethod {
    pub name: String,
    pub comments: Vec<String>,
    pub params: ParamList,
    /// Coerced return type; None renders as void
    pub return_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedClass {
    pub name: String,
    pub superclass: Option<String>,
    pub comments: Vec<String>,
    pub methods: Vec<ResolvedMethod>,
}

/// Proposed parameter override for a `function`-typed parameter nobody has described yet
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideSuggestion {
    /// `Class.method.param`
    pub key: String,
    pub param: String,
}

impl fmt::Display for OverrideSuggestion {
    /// Formatted as a stub2dts.toml `[parameters]` entry
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" = \"{} : ( ) => void\"", self.key, self.param)
    }
}

/// Applies coercion and override tables to parsed classes
pub struct Resolver<'a> {
    tables: &'a OverrideTables,
    with_types: bool,
}

impl<'a> Resolver<'a> {
    pub fn new(tables: &'a OverrideTables, with_types: bool) -> Self {
        Self { tables, with_types }
    }

    /// Resolve every method of a class; suggestions for unknown callbacks are appended
    pub fn resolve_class(
        &self,
        class: &ClassRecord,
        suggestions: &mut Vec<OverrideSuggestion>,
    ) -> ResolvedClass {
        ResolvedClass {
            name: class.name.clone(),
            superclass: class.superclass.clone(),
            comments: class.comments.clone(),
            methods: class
                .methods
                .iter()
                .filter(|method| !method.constructor)
                .map(|method| self.resolve_method(&class.name, method, suggestions))
                .collect(),
        }
    }

    pub fn resolve_method(
        &self,
        class: &str,
        method: &MethodRecord,
        suggestions: &mut Vec<OverrideSuggestion>,
    ) -> ResolvedMethod {
        let mut params = Vec::with_capacity(method.parameters.len());

        for param in &method.parameters {
            let entry = self
                .tables
                .parameter(class, &method.name, &param.name)
                .filter(|_| self.with_types);

            if param.raw_type.as_deref() == Some("function") && entry.is_none() {
                suggestions.push(OverrideSuggestion {
                    key: format!("{}.{}.{}", class, method.name, param.name),
                    param: param.name.clone(),
                });
            }

            match entry {
                Some(ParamOverride::Suppress) => {}
                Some(ParamOverride::Replace(text)) => params.push(ResolvedParam {
                    name: text.clone(),
                    ty: None,
                }),
                None => params.push(ResolvedParam {
                    name: param.name.clone(),
                    ty: param.raw_type.as_deref().map(coerce_type),
                }),
            }
        }

        let params = match self.tables.method(class, &method.name) {
            Some(literal) if self.with_types => ParamList::Literal(literal.to_string()),
            _ => ParamList::Params(params),
        };

        ResolvedMethod {
            name: method.name.clone(),
            comments: method.comments.clone(),
            params,
            return_type: method.return_type.as_deref().map(coerce_type),
        }
    }
}
