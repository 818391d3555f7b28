//! @dose
//! purpose: Renders resolved classes into the TypeScript ambient declaration file: a fixed
//!     header of Bitwig globals followed by one interface block per class.
//!
//! when-editing:
//!     - !Output must be byte-stable for identical input; no maps are iterated here
//!     - !Indentation is four spaces for comment lines and five for member lines
//!     - The header enum values are NESTED = 0, FLAT, GUI in that order
//!
//! invariants:
//!     - Every class passed in produces exactly one `interface` block
//!     - Members are separated by ",\n"; the last member has no comma
//!     - Without types, no `:` fragment is emitted for parameters or returns
//!
//! gotchas:
//!     - Without comments the closing brace follows the last member on the same line

use crate::resolver::{ParamList, ResolvedClass, ResolvedMethod};

/// Globals every Bitwig controller script can rely on
pub const AMBIENT_HEADER: &str = "declare function loadAPI(val: number): void;\n\
declare function println(s : string) : void;\n\
declare function load(file: string) : void;\n\
declare var host : Host;\n\
\n\
declare enum CursorNavigationMode  {\n\
\tNESTED = 0,\n\
\tFLAT,\n\
\tGUI,\n\
}\n";

const COMMENT_INDENT: &str = "    ";
const MEMBER_INDENT: &str = "     ";

/// Output toggles
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub with_comments: bool,
    pub with_types: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            with_comments: true,
            with_types: true,
        }
    }
}

/// Render the whole declaration file
pub fn format_declarations(classes: &[ResolvedClass], options: RenderOptions) -> String {
    let mut out = String::from(AMBIENT_HEADER);
    for class in classes {
        format_interface(&mut out, class, options);
    }
    out
}

/// Render one interface block
pub fn format_interface(out: &mut String, class: &ResolvedClass, options: RenderOptions) {
    if class.name.is_empty() {
        return;
    }

    if options.with_comments {
        for line in &class.comments {
            out.push_str(line);
            out.push('\n');
        }
    }

    out.push_str("interface ");
    out.push_str(&class.name);
    if let Some(ref superclass) = class.superclass {
        out.push_str(" extends ");
        out.push_str(superclass);
    }
    out.push_str(" {\n");

    let members: Vec<String> = class
        .methods
        .iter()
        .map(|method| format_member(method, options))
        .collect();
    out.push_str(&members.join(",\n"));

    if options.with_comments {
        out.push('\n');
    }
    out.push_str("}\n\n");
}

/// Render one member: its comment lines, then `name(params) : type`
pub fn format_member(method: &ResolvedMethod, options: RenderOptions) -> String {
    let mut out = String::new();

    if options.with_comments {
        for line in &method.comments {
            out.push_str(COMMENT_INDENT);
            out.push_str(line);
            out.push('\n');
        }
    }

    out.push_str(MEMBER_INDENT);
    out.push_str(&method.name);
    out.push('(');
    out.push_str(&format_params(&method.params, options.with_types));
    out.push(')');

    if options.with_types {
        out.push_str(" : ");
        out.push_str(method.return_type.as_deref().unwrap_or("void"));
    }

    out
}

fn format_params(params: &ParamList, with_types: bool) -> String {
    match params {
        ParamList::Literal(text) => text.clone(),
        ParamList::Params(params) => params
            .iter()
            .map(|param| match param.ty {
                Some(ref ty) if with_types => format!("{} : {}", param.name, ty),
                _ => param.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", "),
    }
}
