// Rust guideline compliant 2026-10-18

//! Implementation of the `bbd build` commands.

use crate::output::OutputFormatter;
use crate::session::Session;
use buildboard_app::{AppError, Result};
use buildboard_core::{BuildDraft, BuildFilter, BuildStatus, GameVersion, GuideStatus};
use serde_json::json;
use std::time::Instant;

/// Editable build fields, shared by `add`, `edit` and `check build`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BuildFields {
    /// Game (poe1, poe2)
    #[arg(long)]
    pub game: Option<GameVersion>,

    /// Character name
    #[arg(long)]
    pub character: Option<String>,

    /// League
    #[arg(long)]
    pub league: Option<String>,

    /// Build status (active, paused, completed)
    #[arg(long)]
    pub status: Option<BuildStatus>,

    /// Guide status (up-to-date, outdated, unknown)
    #[arg(long)]
    pub guide_status: Option<GuideStatus>,

    /// Path of Building link
    #[arg(long)]
    pub pob: Option<String>,

    /// Guide link
    #[arg(long)]
    pub guide: Option<String>,

    /// Notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl BuildFields {
    /// Overlays the given fields on `draft`. Unset fields keep their value.
    #[must_use]
    pub fn apply(self, mut draft: BuildDraft) -> BuildDraft {
        if self.game.is_some() {
            draft.game_version = self.game;
        }
        if self.character.is_some() {
            draft.character_name = self.character;
        }
        if self.league.is_some() {
            draft.league = self.league;
        }
        if self.status.is_some() {
            draft.build_status = self.status;
        }
        if self.guide_status.is_some() {
            draft.guide_status = self.guide_status;
        }
        if self.pob.is_some() {
            draft.pob_link = self.pob;
        }
        if self.guide.is_some() {
            draft.guide_link = self.guide;
        }
        if self.notes.is_some() {
            draft.notes = self.notes;
        }
        draft
    }
}

/// Build subcommands.
#[derive(Debug, clap::Subcommand)]
pub enum BuildAction {
    /// Add a build
    Add {
        /// Build name
        name: String,

        #[command(flatten)]
        fields: BuildFields,
    },

    /// Edit a build
    Edit {
        /// Build ID (full or prefix)
        id: String,

        /// New build name
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: BuildFields,
    },

    /// Delete a build
    Rm {
        /// Build ID (full or prefix)
        id: String,
    },

    /// List builds, newest first
    Ls {
        /// Filter (all, active, poe1, poe2)
        #[arg(long, default_value = "all")]
        filter: BuildFilter,

        /// Search build and character names
        #[arg(long)]
        search: Option<String>,
    },

    /// Print a build's link and record it as opened
    Open {
        /// Build ID (full or prefix)
        id: String,

        /// Open the guide link instead of the Path of Building link
        #[arg(long)]
        guide: bool,
    },
}

/// Runs a build subcommand.
///
/// # Errors
///
/// Returns `Validation` for drafts that fail the build rules, `NotFound`
/// for unknown IDs, or any store error.
pub fn execute(
    action: BuildAction,
    session: &mut Session,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    match action {
        BuildAction::Add { name, fields } => {
            let draft = fields.apply(BuildDraft {
                build_name: name,
                build_status: Some(BuildStatus::Active),
                ..BuildDraft::default()
            });
            let builds = session.dashboard().builds();
            builds.open_add_modal();
            let build = builds.save(draft)?;
            Ok(formatter.format_build(&build))
        }
        BuildAction::Edit { id, name, fields } => {
            let build = session.find_build(&id)?;
            let builds = session.dashboard().builds();
            builds.open_edit_modal(&build)?;

            let mut draft = fields.apply(build.to_draft());
            if let Some(name) = name {
                draft.build_name = name;
            }
            let saved = builds.save(draft)?;
            Ok(formatter.format_build(&saved))
        }
        BuildAction::Rm { id } => {
            let build = session.find_build(&id)?;
            session.dashboard().builds().delete(&build.id)?;
            Ok(formatter.format_ack(
                &format!("✓ Slettede build {} ({})", build.id, build.build_name),
                json!({ "deleted": build.id }),
            ))
        }
        BuildAction::Ls { filter, search } => {
            let dashboard = session.dashboard_mut();
            dashboard.search_mut().set_filter(filter);
            if let Some(query) = search {
                let search = dashboard.search_mut();
                search.set_query(query, Instant::now());
                search.flush();
            }
            Ok(formatter.format_builds(&dashboard.visible_builds()))
        }
        BuildAction::Open { id, guide } => {
            let build = session.find_build(&id)?;
            let link = if guide {
                build.guide_link.clone()
            } else {
                build.pob_link.clone().or_else(|| build.guide_link.clone())
            };
            let link = link.ok_or_else(|| {
                AppError::InvalidInput(format!("Build {} has no link to open", build.id))
            })?;

            session.dashboard().builds().link_clicked(&build.id)?;
            Ok(formatter.format_ack(&link, json!({ "id": build.id, "url": link })))
        }
    }
}
