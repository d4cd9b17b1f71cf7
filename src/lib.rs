//! tsguard - Runtime type-guard generation for TypeScript interfaces
//!
//! This crate re-exports all layers of the tsguard system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: tsguard_cli     — Pipeline and command-line binary
//! Layer 1: tsguard_codegen — Symbol table, path resolver, guard synthesizer
//! Layer 0: tsguard_syntax  — Span, token, lexer, AST, parser, errors
//! ```

pub use tsguard_cli as cli;
pub use tsguard_codegen as codegen;
pub use tsguard_syntax as syntax;
