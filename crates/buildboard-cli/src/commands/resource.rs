// Rust guideline compliant 2026-10-18

//! Implementation of the `bbd resource` commands.

use crate::output::OutputFormatter;
use crate::session::Session;
use buildboard_app::{AppError, Result};
use buildboard_core::{ResourceCategory, ResourceDraft};
use serde_json::json;

/// Resource fields, shared by `add` and `check resource`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResourceFields {
    /// Link target
    #[arg(long)]
    pub url: Option<String>,

    /// Short description
    #[arg(long)]
    pub description: Option<String>,

    /// Category (poe1, poe2, programs, community)
    #[arg(long)]
    pub category: Option<ResourceCategory>,

    /// Icon, usually one emoji
    #[arg(long)]
    pub icon: Option<String>,

    /// Free-form kind tag
    #[arg(long)]
    pub kind: Option<String>,
}

impl ResourceFields {
    /// Builds a draft with the given title.
    #[must_use]
    pub fn into_draft(self, title: String) -> ResourceDraft {
        ResourceDraft {
            title,
            description: self.description.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            icon: self.icon,
            category: self.category,
            kind: self.kind,
        }
    }
}

/// Resource subcommands.
#[derive(Debug, clap::Subcommand)]
pub enum ResourceAction {
    /// Add a custom resource
    Add {
        /// Title
        title: String,

        #[command(flatten)]
        fields: ResourceFields,
    },

    /// Delete a custom resource
    Rm {
        /// Resource ID (full or prefix)
        id: String,
    },

    /// List visible resources by category
    Ls {
        /// Only list your own resources
        #[arg(long)]
        custom: bool,
    },

    /// Hide a resource from the list
    Hide {
        /// Resource ID (full or prefix)
        id: String,
    },

    /// Show all hidden resources again
    Restore,
}

/// Runs a resource subcommand.
///
/// # Errors
///
/// Returns `Validation` for drafts that fail the resource rules,
/// `NotFound` for unknown IDs, `InvalidInput` for deleting a built-in or
/// failed deletes, or any store error.
pub fn execute(
    action: ResourceAction,
    session: &mut Session,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let resources = session.dashboard().resources();

    match action {
        ResourceAction::Add { title, fields } => {
            resources.open_add_modal();
            let resource = resources.save(fields.into_draft(title))?;
            Ok(formatter.format_resource(&resource))
        }
        ResourceAction::Rm { id } => {
            let resource = session.find_resource(&id)?;
            if resource.is_default {
                return Err(AppError::InvalidInput(format!(
                    "Built-in resource {} can be hidden but not deleted",
                    resource.id
                )));
            }
            if !resources.delete(&resource.id) {
                return Err(AppError::InvalidInput(format!(
                    "Could not delete resource {}",
                    resource.id
                )));
            }
            Ok(formatter.format_ack(
                &format!("✓ Slettede ressource {} ({})", resource.id, resource.title),
                json!({ "deleted": resource.id }),
            ))
        }
        ResourceAction::Ls { custom } => {
            if custom {
                let own = resources.custom_resources();
                let groups: Vec<_> = ResourceCategory::ORDER
                    .iter()
                    .filter_map(|category| {
                        let items: Vec<_> = own
                            .iter()
                            .filter(|r| r.category == *category)
                            .cloned()
                            .collect();
                        (!items.is_empty()).then_some((*category, items))
                    })
                    .collect();
                return Ok(formatter.format_resources(&groups));
            }
            Ok(formatter.format_resources(&resources.visible_resources()))
        }
        ResourceAction::Hide { id } => {
            let resource = session.find_resource(&id)?;
            resources.hide(&resource.id)?;
            Ok(formatter.format_ack(
                &format!("✓ Skjulte {} ({})", resource.id, resource.title),
                json!({ "hidden": resources.hidden_resource_ids() }),
            ))
        }
        ResourceAction::Restore => {
            let restored = resources.hidden_resource_ids().len();
            resources.restore_all()?;
            Ok(formatter.format_ack(
                &format!("✓ Gendannede {restored} skjulte ressourcer"),
                json!({ "restored": restored }),
            ))
        }
    }
}
