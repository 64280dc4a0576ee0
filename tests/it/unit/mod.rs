//! Unit tests for the carousel crate.

mod settings_tests;
