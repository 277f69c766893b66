// Rust guideline compliant 2026-10-18

//! Buildboard Core Library
//!
//! This crate provides the foundational components of the buildboard dashboard:
//! - Data models (Build, Resource, preferences, enums)
//! - Form validation (rule library, field and form validators, error state)
//! - Loading-state tracking
//! - Build search with a debounced query
//! - Storage engine (JSONL collections with file locking)
//! - Hash ID generation and configuration

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod identity;
pub mod loading;
pub mod models;
pub mod search;
pub mod storage;
pub mod validation;

pub use catalog::{default_resources, visible_by_category};
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use loading::{LoadingGuard, LoadingState, LoadingTracker};
pub use models::{
    AuthUser, Build, BuildDraft, BuildStatus, Document, GameVersion, GuideStatus, Resource,
    ResourceCategory, ResourceDraft, Tab, UserPreferences,
};
pub use search::{filter_builds, BuildFilter, SearchState};
pub use storage::Storage;
pub use validation::{
    build_validation_rules, resource_validation_rules, validate_field, ErrorState, FieldErrors,
    FieldRules, FormRules, RuleEntry,
};
