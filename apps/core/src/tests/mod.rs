//! Test Module
//!
//! Cross-module test suite for the analysis engine.
//!
//! ## Test Categories
//! - `engine_tests`: full-pipeline analysis, invariants, JSON export
//! - `matcher_tests`: knowledge-base matching end to end
