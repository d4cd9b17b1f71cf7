//! Guard synthesizer and module path resolver for tsguard.
//!
//! This crate provides:
//! - [`generate`] - Synthesizing a guard module from parsed items
//! - [`SymbolTable`] - Unified name resolution over imports and same-file
//!   declarations
//! - [`guard_import`] - Rewriting declaration module paths to guard paths

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod guard;
pub mod resolve;
pub mod symbols;

pub use guard::generate;
pub use resolve::{guard_import, guard_specifier};
pub use symbols::{Resolution, SymbolTable};
