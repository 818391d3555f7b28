//! @dose
//! purpose: Library crate root for stub2dts. Exposes the stub parser, the type resolver,
//!     the override tables and the declaration formatter for use as both a CLI tool and
//!     a library.
//!
//! when-editing:
//!     - !All public modules must be declared here with pub mod
//!     - Keep the re-export list organized by module
//!
//! invariants:
//!     - The pipeline is parse -> resolve -> format; each stage is usable on its own
//!
//! gotchas:
//!     - The lib.rs is separate from main.rs - library consumers get lib, CLI gets main

pub mod cli;
pub mod commands;
pub mod config;
pub mod exclusion;
pub mod formatter;
pub mod overrides;
pub mod parser;
pub mod resolver;
pub mod types;

// Re-export main types for convenience
pub use cli::{Cli, Commands, GenerateArgs, InspectArgs};
pub use config::{Config, ConfigError};
pub use formatter::{format_declarations, RenderOptions, AMBIENT_HEADER};
pub use overrides::{OverrideTables, ParamOverride};
pub use parser::{parse_stub, parse_stub_file, Diagnostic, ParseError, ParsedStub};
pub use resolver::{coerce_type, OverrideSuggestion, ResolvedClass, Resolver};
pub use types::{ClassRecord, DocBlock, MethodRecord, ParameterRecord};
