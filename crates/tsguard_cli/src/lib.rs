//! Pipeline and CLI for tsguard.
//!
//! Reads one declaration file, synthesizes its guard module, and writes
//! the result to a sibling file. Read once, compute once, write once; a
//! rerun on unchanged input produces byte-identical output.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs;
use std::path::{Path, PathBuf};

use tsguard_codegen::generate;
use tsguard_syntax::{Error, Result, parse};

/// Derives the output path for a declaration file.
///
/// `X.interface.ts` maps to `X.guard.ts`; a plain `X.ts` also maps to
/// `X.guard.ts`; a path without a `.ts` extension appends `.guard.ts`.
#[must_use]
pub fn guard_output_path(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let guard_name = if let Some(base) = file_name.strip_suffix(".interface.ts") {
        format!("{base}.guard.ts")
    } else if let Some(base) = file_name.strip_suffix(".ts") {
        format!("{base}.guard.ts")
    } else {
        format!("{file_name}.guard.ts")
    };

    input.with_file_name(guard_name)
}

/// Generates the guard module for one declaration file.
///
/// Returns the path of the written guard file.
///
/// # Errors
/// Propagates I/O failures, parse errors, and generation errors, each
/// tagged with the input file name.
pub fn generate_file(input: &Path) -> Result<PathBuf> {
    let display_name = input.display().to_string();
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let source = fs::read_to_string(input).map_err(|e| attach(e.into(), &display_name))?;
    let items = parse(&source).map_err(|e| attach(e, &display_name))?;
    let module = generate(&file_name, &items).map_err(|e| attach(e, &display_name))?;

    let output = guard_output_path(input);
    fs::write(&output, module).map_err(|e| attach(e.into(), &display_name))?;

    Ok(output)
}

/// Tags an error with the input file name unless it already carries one.
fn attach(error: Error, file: &str) -> Error {
    if error.context.is_some() {
        error
    } else {
        error.with_context(file)
    }
}
