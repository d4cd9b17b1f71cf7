//! Lexer, parser, and AST for TypeScript interface declaration files.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of the declaration subset
//! - [`parse`] - Parsing tokens into [`Item`]s
//! - [`Error`] - Error types shared by the whole workspace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;


pub use ast::{Field, ImportDecl, InterfaceDecl, Item, TypeExpr};
pub use error::{Error, ErrorKind, Result};
pub use lexer::Lexer;
pub use parser::{Parser, parse};
pub use span::Span;
pub use token::{Token, TokenKind};
