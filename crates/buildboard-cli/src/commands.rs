// Rust guideline compliant 2026-10-18

//! Command implementations for the buildboard CLI.

pub mod build;
pub mod check;
pub mod resource;
