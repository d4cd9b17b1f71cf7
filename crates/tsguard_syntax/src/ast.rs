//! Abstract syntax tree for declaration files.
//!
//! The AST covers exactly the statements guard generation consumes:
//! named-binding imports and interface declarations. Everything else in
//! a file is skipped by the parser and never reaches the tree.

use crate::span::Span;

/// A top-level item in a declaration file.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    /// `import { A, B } from '...';`
    Import(ImportDecl),
    /// `interface Name { ... }` (optionally `export`ed)
    Interface(InterfaceDecl),
}

impl Item {
    /// Returns the source span of this item.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Import(decl) => decl.span,
            Self::Interface(decl) => decl.span,
        }
    }

    /// Returns the import declaration, or None if not an import.
    #[must_use]
    pub const fn as_import(&self) -> Option<&ImportDecl> {
        match self {
            Self::Import(decl) => Some(decl),
            Self::Interface(_) => None,
        }
    }

    /// Returns the interface declaration, or None if not an interface.
    #[must_use]
    pub const fn as_interface(&self) -> Option<&InterfaceDecl> {
        match self {
            Self::Interface(decl) => Some(decl),
            Self::Import(_) => None,
        }
    }
}

/// A named-binding import statement.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportDecl {
    /// Local names introduced by the import, in written order.
    pub bindings: Vec<String>,
    /// The module specifier, e.g. `./base.interface`.
    pub specifier: String,
    /// Source location of the whole statement.
    pub span: Span,
}

/// An interface declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceDecl {
    /// The declared interface name.
    pub name: String,
    /// Parent interface names from the extends clause, in written order.
    pub extends: Vec<String>,
    /// Members in declaration order.
    pub fields: Vec<Field>,
    /// Source location of the whole declaration.
    pub span: Span,
}

/// A member of an interface declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    /// The member name.
    pub name: String,
    /// The classified member type.
    pub ty: TypeExpr,
    /// Source location of the member.
    pub span: Span,
}

/// A classified field type.
///
/// The classification is total: any type annotation that is not a bare
/// primitive keyword or a single named reference lands in `Unsupported`,
/// carrying its source text so generation can report it.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeExpr {
    /// The `number` primitive.
    Number,
    /// The `string` primitive.
    String,
    /// A single named reference to another interface.
    Named(String),
    /// Anything else: arrays, unions, optionals, generics, inline objects.
    Unsupported(String),
}

/// Helper constructors for AST nodes (for testing).
impl InterfaceDecl {
    /// Creates an interface with default spans.
    #[cfg(test)]
    pub fn test(name: impl Into<String>, extends: Vec<&str>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            extends: extends.into_iter().map(String::from).collect(),
            fields,
            span: Span::default(),
        }
    }
}

#[cfg(test)]
impl Field {
    /// Creates a field with a default span.
    pub fn test(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
            span: Span::default(),
        }
    }
}
