// Rust guideline compliant 2026-10-18

//! Implementation of the `bbd check` command: runs a form's rule set over a
//! draft without saving it.

use crate::commands::build::BuildFields;
use crate::commands::resource::ResourceFields;
use crate::output::OutputFormatter;
use buildboard_app::{AppError, Result};
use buildboard_core::validation::{evaluate, form_data, FormRules};
use buildboard_core::{build_validation_rules, resource_validation_rules, BuildDraft};
use serde::Serialize;
use serde_json::json;

/// Forms that can be checked.
#[derive(Debug, clap::Subcommand)]
pub enum CheckTarget {
    /// Check a build draft
    Build {
        /// Build name
        name: Option<String>,

        #[command(flatten)]
        fields: BuildFields,
    },

    /// Check a resource draft
    Resource {
        /// Title
        title: Option<String>,

        #[command(flatten)]
        fields: ResourceFields,
    },
}

/// Validates a draft.
///
/// # Errors
///
/// Returns `Validation` carrying every field message if the draft fails its
/// rule set.
pub fn execute(target: CheckTarget, formatter: &dyn OutputFormatter) -> Result<String> {
    match target {
        CheckTarget::Build { name, fields } => {
            let draft = fields.apply(BuildDraft {
                build_name: name.unwrap_or_default(),
                ..BuildDraft::default()
            });
            check(&draft, build_validation_rules(), formatter)
        }
        CheckTarget::Resource { title, fields } => {
            let draft = fields.into_draft(title.unwrap_or_default());
            check(&draft, resource_validation_rules(), formatter)
        }
    }
}

fn check<T: Serialize>(
    draft: &T,
    rules: &FormRules,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let errors = evaluate(&form_data(draft)?, rules);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    Ok(formatter.format_ack("✓ Gyldig", json!({ "valid": true })))
}
