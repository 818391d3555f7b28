//! @dose
//! purpose: Separator-based tokenizer for stub lines. Every split the parser performs goes
//!     through here so the line-shape assumptions about the stub files live in one place.
//!
//! when-editing:
//!     - !Comment lines split on `*` too; declaration lines split on braces instead
//!     - The split patterns are lazily compiled once per process
//!
//! invariants:
//!     - Returned tokens are never empty
//!     - Token order follows the source line
//!
//! gotchas:
//!     - `/` is not a separator, so `/*` and `*/masks` survive as tokens in declarations;
//!       the override tables rely on that (e.g. `MidiIn.createNoteInput./*`)
//!     - Dotted type names such as `{java.lang.String}` are split apart

use once_cell::sync::Lazy;
use regex::Regex;

/// Separators inside documentation comment lines
static COMMENT_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s.*=,();]+").expect("valid comment separator pattern"));

/// Separators inside prototype declaration lines
static DECLARATION_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s.=,(){};]+").expect("valid declaration separator pattern"));

/// Anything that is not a word character
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("valid word pattern"));

fn split_nonempty<'a>(pattern: &Regex, line: &'a str) -> Vec<&'a str> {
    pattern.split(line).filter(|s| !s.is_empty()).collect()
}

/// Split a comment line, e.g. ` * @param {int} x the index` -> `["@param", "{int}", "x", ...]`
pub fn comment_tokens(line: &str) -> Vec<&str> {
    split_nonempty(&COMMENT_SEPARATORS, line)
}

/// Split a declaration line, e.g. `Clip.prototype.play = function(x) {}` ->
/// `["Clip", "prototype", "play", "function", "x"]`
pub fn declaration_tokens(line: &str) -> Vec<&str> {
    split_nonempty(&DECLARATION_SEPARATORS, line)
}

/// Split a line into word tokens, e.g. `function Clip() {}` -> `["function", "Clip"]`
pub fn word_tokens(line: &str) -> Vec<&str> {
    split_nonempty(&NON_WORD, line)
}

/// Remove brace characters from an annotation type, e.g. `{int}` -> `int`
pub fn strip_braces(token: &str) -> String {
    token.chars().filter(|c| *c != '{' && *c != '}').collect()
}
