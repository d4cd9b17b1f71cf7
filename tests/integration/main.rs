//! Cross-layer integration tests for tsguard
//!
//! Tests that verify the whole read-generate-write pipeline on disk.
