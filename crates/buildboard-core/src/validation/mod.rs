// Rust guideline compliant 2026-10-18

//! Client-side form validation.
//!
//! - [`rules`]: the rule library (`required`, `minLength`, `pobUrl`, ...)
//! - [`field`]: rule list entries and per-field evaluation
//! - [`form`]: form rule sets, whole-form evaluation, built-in rule sets
//! - [`state`]: the observable error state a form owns

pub mod field;
pub mod form;
pub mod rules;
pub mod state;

pub use field::{validate_field, RuleConfigIssue, RuleEntry};
pub use form::{
    build_validation_rules, evaluate, form_data, resource_validation_rules, FieldRules, FormRules,
};
pub use rules::RuleFn;
pub use state::{ErrorState, FieldErrors, ListenerId};
