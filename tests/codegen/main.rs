//! Integration tests for Layer 1: Codegen
//!
//! Tests for guard synthesis and dependency import resolution.

mod guards;
mod imports;
