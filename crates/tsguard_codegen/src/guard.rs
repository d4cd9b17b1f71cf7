//! Guard synthesizer.
//!
//! Walks the parsed items of one declaration file and assembles the text
//! of the guard module: one import of each declared type, one import per
//! distinct dependency guard, one canonical predicate per primitive kind
//! used, and one `is<Name>` entry guard per interface.

use tsguard_syntax::{Error, InterfaceDecl, Item, Result, TypeExpr};

use crate::resolve::guard_import;
use crate::symbols::{Resolution, SymbolTable};

/// Primitive kinds with canonical guard functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Primitive {
    Number,
    String,
}

impl Primitive {
    /// Name of the canonical predicate for this primitive.
    const fn guard_name(self) -> &'static str {
        match self {
            Self::Number => "isNumber",
            Self::String => "isString",
        }
    }

    /// Canonical predicate definition for this primitive.
    const fn definition(self) -> &'static str {
        match self {
            Self::Number => {
                "export function isNumber(value: any): value is number {\n\treturn typeof value === \"number\";\n}\n"
            }
            Self::String => {
                "export function isString(value: any): value is string {\n\treturn typeof value === \"string\";\n}\n"
            }
        }
    }
}

/// Generates the guard module text for one declaration file.
///
/// `file_name` is the final path component of the input file, e.g.
/// `point.interface.ts`; it determines the import of the declared types
/// themselves. Declarations are processed in source order, each with its
/// own accumulators, and their guard blocks concatenated.
///
/// # Errors
/// Returns [`tsguard_syntax::ErrorKind::NoInterfaces`] if the file declares no
/// interface, [`tsguard_syntax::ErrorKind::UnsupportedFieldType`] for a field
/// that is neither a primitive nor a single named reference, and
/// [`tsguard_syntax::ErrorKind::UnresolvedReference`] for a referenced name
/// that was neither imported nor declared in the file.
pub fn generate(file_name: &str, items: &[Item]) -> Result<String> {
    let symbols = SymbolTable::from_items(items);
    let own_module = own_module_specifier(file_name);

    let interfaces: Vec<&InterfaceDecl> =
        items.iter().filter_map(Item::as_interface).collect();
    if interfaces.is_empty() {
        return Err(Error::no_interfaces(file_name));
    }

    let blocks: Vec<String> = interfaces
        .iter()
        .map(|decl| synthesize(decl, &symbols, &own_module))
        .collect::<Result<_>>()?;

    Ok(blocks.join("\n"))
}

/// Synthesizes the guard block for one interface declaration.
fn synthesize(decl: &InterfaceDecl, symbols: &SymbolTable, own_module: &str) -> Result<String> {
    // Accumulators are scoped to this declaration so imports cannot leak
    // between interfaces sharing a file.
    let mut primitives: Vec<Primitive> = Vec::new();
    let mut dependencies: Vec<String> = Vec::new();
    let mut clauses: Vec<String> = Vec::new();

    for field in &decl.fields {
        match &field.ty {
            TypeExpr::Number => {
                push_unique(&mut primitives, Primitive::Number);
                clauses.push(format!(
                    "{}(value.{})",
                    Primitive::Number.guard_name(),
                    field.name
                ));
            }
            TypeExpr::String => {
                push_unique(&mut primitives, Primitive::String);
                clauses.push(format!(
                    "{}(value.{})",
                    Primitive::String.guard_name(),
                    field.name
                ));
            }
            TypeExpr::Named(name) => {
                if !dependencies.contains(name) {
                    dependencies.push(name.clone());
                }
                clauses.push(format!("is{name}(value.{})", field.name));
            }
            TypeExpr::Unsupported(text) => {
                return Err(Error::unsupported_field_type(&decl.name, &field.name, text));
            }
        }
    }

    // Parent guards check the whole value, not a sub-field.
    for parent in &decl.extends {
        if !dependencies.contains(parent) {
            dependencies.push(parent.clone());
        }
        clauses.push(format!("is{parent}(value)"));
    }

    let mut out = String::new();
    out.push_str(&format!(
        "import {{ {} }} from '{own_module}';\n",
        decl.name
    ));

    for dependency in &dependencies {
        match symbols.resolve(dependency) {
            Some(Resolution::Imported(specifier)) => {
                out.push_str(&guard_import(dependency, specifier));
                out.push('\n');
            }
            // Same-file guards land in this generated file; no import.
            Some(Resolution::SameFile) => {}
            None => {
                return Err(Error::unresolved_reference(&decl.name, dependency));
            }
        }
    }
    out.push('\n');

    for primitive in &primitives {
        out.push_str(primitive.definition());
    }

    let chain = if clauses.is_empty() {
        "true".to_string()
    } else {
        format!("{} && true", clauses.join(" && "))
    };
    out.push_str(&format!(
        "export function is{0}(value: any): value is {0} {{\n\treturn {chain};\n}}\n",
        decl.name
    ));

    Ok(out)
}

/// The module specifier of the input file itself, minus the trailing `.ts`.
///
/// A `point.interface.ts` input imports its declared types from
/// `./point.interface`.
fn own_module_specifier(file_name: &str) -> String {
    let stem = file_name.strip_suffix(".ts").unwrap_or(file_name);
    format!("./{stem}")
}

/// Appends a value to the vector unless it is already present.
fn push_unique<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if !values.contains(&value) {
        values.push(value);
    }
}
