//! Property-based tests for the rewrite rules.

mod rule_properties;
