//! Integration test suite entry point.

#[path = "../common/mod.rs"]
mod common;

mod import_tests;
mod rewrite_tests;
