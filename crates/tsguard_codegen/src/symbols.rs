//! Unified name resolution over imports and same-file declarations.
//!
//! The symbol table is built over the whole file before any field is
//! classified, so a reference resolves the same way no matter where its
//! import or declaration sits relative to the use.

use std::collections::{HashMap, HashSet};

use tsguard_syntax::Item;

/// Where a referenced name comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The name was imported from the given module specifier.
    Imported(&'a str),
    /// The name is an interface declared in the same file.
    SameFile,
}

/// Name resolution table for one declaration file.
#[derive(Debug, Default)]
pub struct SymbolTable {
    /// Imported local name to module specifier. Last import wins for
    /// duplicate local names.
    imports: HashMap<String, String>,
    /// Interface names declared in this file.
    locals: HashSet<String>,
}

impl SymbolTable {
    /// Builds the table from all top-level items of a file.
    #[must_use]
    pub fn from_items(items: &[Item]) -> Self {
        let mut table = Self::default();
        for item in items {
            match item {
                Item::Import(import) => {
                    for binding in &import.bindings {
                        table
                            .imports
                            .insert(binding.clone(), import.specifier.clone());
                    }
                }
                Item::Interface(decl) => {
                    table.locals.insert(decl.name.clone());
                }
            }
        }
        table
    }

    /// Resolves a referenced name.
    ///
    /// A same-file declaration shadows an import of the same name, since
    /// its guard lands in the generated file itself.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Resolution<'_>> {
        if self.locals.contains(name) {
            Some(Resolution::SameFile)
        } else {
            self.imports
                .get(name)
                .map(|specifier| Resolution::Imported(specifier))
        }
    }
}
