//! Module path resolution for dependency guard imports.
//!
//! A dependency imported from `./base.interface` has its guard generated
//! next to it as `./base.guard`; the resolver rewrites the recorded
//! specifier accordingly and renders the import line.

/// Rewrites a declaration module specifier to its sibling guard module.
///
/// The `.interface` marker is stripped from the final path segment if
/// present, and the `.guard` marker appended.
#[must_use]
pub fn guard_specifier(specifier: &str) -> String {
    let mut segments: Vec<&str> = specifier.split('/').collect();
    // split always yields at least one segment
    if let Some(last) = segments.last_mut() {
        *last = last.strip_suffix(".interface").unwrap_or(last);
    }
    format!("{}.guard", segments.join("/"))
}

/// Renders the import line for a dependency's guard function.
#[must_use]
pub fn guard_import(name: &str, specifier: &str) -> String {
    format!("import {{ is{name} }} from '{}';", guard_specifier(specifier))
}
