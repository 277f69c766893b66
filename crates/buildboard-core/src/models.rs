// Rust guideline compliant 2026-10-18

//! Core data models for buildboard.
//!
//! Documents serialize with camelCase keys so that a serialized draft can be
//! fed straight into the form validators, whose rule sets are keyed by the
//! same field names.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A document persisted in a collection.
pub trait Document {
    /// Returns the document ID.
    fn id(&self) -> &str;

    /// Returns the owning user ID.
    fn user_id(&self) -> &str;

    /// Returns the last update timestamp used for ordering.
    fn updated_at(&self) -> i64;

    /// Validates the document before it is written.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is empty.
    fn validate(&self) -> Result<()>;
}

/// Game a build belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameVersion {
    /// Path of Exile 1.
    Poe1,
    /// Path of Exile 2.
    Poe2,
}

/// Progress status of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStatus {
    /// Currently being played.
    Active,
    /// Put aside for now.
    Paused,
    /// Finished.
    Completed,
}

/// Whether the guide a build follows is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuideStatus {
    /// Guide matches the current patch.
    UpToDate,
    /// Guide is behind the current patch.
    Outdated,
    /// Nobody checked.
    Unknown,
}

/// Category a resource link is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceCategory {
    /// Path of Exile 1 references.
    #[serde(rename = "Path of Exile 1")]
    Poe1,
    /// Path of Exile 2 references.
    #[serde(rename = "Path of Exile 2")]
    Poe2,
    /// Desktop programs and overlays.
    #[serde(rename = "Programs")]
    Programs,
    /// Community sites.
    #[serde(rename = "Community")]
    Community,
}

/// Dashboard tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// The build list.
    #[default]
    Builds,
    /// The resource links.
    Resources,
}

impl ResourceCategory {
    /// Display order of categories.
    pub const ORDER: [ResourceCategory; 4] = [
        ResourceCategory::Poe1,
        ResourceCategory::Poe2,
        ResourceCategory::Programs,
        ResourceCategory::Community,
    ];

    /// Returns the display label of the category.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ResourceCategory::Poe1 => "Path of Exile 1",
            ResourceCategory::Poe2 => "Path of Exile 2",
            ResourceCategory::Programs => "Programs",
            ResourceCategory::Community => "Community",
        }
    }
}

macro_rules! str_enum {
    ($ty:ty, $kind:literal, { $($text:literal => $variant:expr),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = Error;

            fn from_str(value: &str) -> Result<Self> {
                match value.trim().to_lowercase().as_str() {
                    $($text => Ok($variant),)+
                    _ => Err(Error::InvalidValue {
                        kind: $kind,
                        value: value.to_string(),
                    }),
                }
            }
        }
    };
}

str_enum!(GameVersion, "game version", {
    "poe1" => GameVersion::Poe1,
    "poe2" => GameVersion::Poe2,
});

str_enum!(BuildStatus, "build status", {
    "active" => BuildStatus::Active,
    "paused" => BuildStatus::Paused,
    "completed" => BuildStatus::Completed,
});

str_enum!(GuideStatus, "guide status", {
    "up-to-date" => GuideStatus::UpToDate,
    "up_to_date" => GuideStatus::UpToDate,
    "outdated" => GuideStatus::Outdated,
    "unknown" => GuideStatus::Unknown,
});

str_enum!(ResourceCategory, "resource category", {
    "path of exile 1" => ResourceCategory::Poe1,
    "poe1" => ResourceCategory::Poe1,
    "path of exile 2" => ResourceCategory::Poe2,
    "poe2" => ResourceCategory::Poe2,
    "programs" => ResourceCategory::Programs,
    "community" => ResourceCategory::Community,
});

str_enum!(Tab, "tab", {
    "builds" => Tab::Builds,
    "resources" => Tab::Resources,
});

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameVersion::Poe1 => "poe1",
            GameVersion::Poe2 => "poe2",
        })
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User-editable fields of a build, as submitted from the build form.
///
/// Required enum fields are optional here so that an incomplete form can be
/// represented and rejected by validation rather than by deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDraft {
    /// Display name of the build.
    #[serde(default)]
    pub build_name: String,
    /// Game the build is for.
    #[serde(default)]
    pub game_version: Option<GameVersion>,
    /// In-game character name.
    #[serde(default)]
    pub character_name: Option<String>,
    /// League the character plays in.
    #[serde(default)]
    pub league: Option<String>,
    /// Progress status.
    #[serde(default)]
    pub build_status: Option<BuildStatus>,
    /// Guide freshness.
    #[serde(default)]
    pub guide_status: Option<GuideStatus>,
    /// Path of Building import link.
    #[serde(default)]
    pub pob_link: Option<String>,
    /// Link to an external guide.
    #[serde(default)]
    pub guide_link: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// A tracked character build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    /// Document ID (format: bld-XXXXXX).
    pub id: String,
    /// Owning user.
    pub user_id: String,
    /// Display name of the build.
    pub build_name: String,
    /// Game the build is for.
    pub game_version: GameVersion,
    /// In-game character name.
    #[serde(default)]
    pub character_name: Option<String>,
    /// League the character plays in.
    #[serde(default)]
    pub league: Option<String>,
    /// Progress status.
    pub build_status: BuildStatus,
    /// Guide freshness.
    #[serde(default)]
    pub guide_status: Option<GuideStatus>,
    /// Path of Building import link.
    #[serde(default)]
    pub pob_link: Option<String>,
    /// Link to an external guide.
    #[serde(default)]
    pub guide_link: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
    /// Unix timestamp of the last time the build was opened.
    #[serde(default)]
    pub last_opened: Option<i64>,
}

impl Build {
    /// Creates a build from a submitted draft.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft lacks a game version or build status.
    pub fn from_draft(id: String, user_id: String, draft: BuildDraft, now: i64) -> Result<Self> {
        let mut build = Self {
            id,
            user_id,
            build_name: String::new(),
            game_version: GameVersion::Poe1,
            character_name: None,
            league: None,
            build_status: BuildStatus::Active,
            guide_status: None,
            pob_link: None,
            guide_link: None,
            notes: None,
            created_at: now,
            updated_at: now,
            last_opened: Some(now),
        };
        build.apply(draft, now)?;
        Ok(build)
    }

    /// Applies the editable fields of a draft and bumps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft lacks a game version or build status.
    pub fn apply(&mut self, draft: BuildDraft, now: i64) -> Result<()> {
        self.game_version = draft.game_version.ok_or_else(|| {
            Error::InvalidDocument("Build is missing a game version".to_string())
        })?;
        self.build_status = draft.build_status.ok_or_else(|| {
            Error::InvalidDocument("Build is missing a build status".to_string())
        })?;
        self.build_name = draft.build_name.trim().to_string();
        self.character_name = non_blank(draft.character_name);
        self.league = non_blank(draft.league);
        self.guide_status = draft.guide_status;
        self.pob_link = non_blank(draft.pob_link);
        self.guide_link = non_blank(draft.guide_link);
        self.notes = non_blank(draft.notes);
        self.updated_at = now;
        Ok(())
    }

    /// Returns the editable fields, for pre-filling an edit form.
    #[must_use]
    pub fn to_draft(&self) -> BuildDraft {
        BuildDraft {
            build_name: self.build_name.clone(),
            game_version: Some(self.game_version),
            character_name: self.character_name.clone(),
            league: self.league.clone(),
            build_status: Some(self.build_status),
            guide_status: self.guide_status,
            pob_link: self.pob_link.clone(),
            guide_link: self.guide_link.clone(),
            notes: self.notes.clone(),
        }
    }
}

impl Document for Build {
    fn id(&self) -> &str {
        &self.id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn updated_at(&self) -> i64 {
        self.updated_at
    }

    fn validate(&self) -> Result<()> {
        crate::identity::validate_id_format(crate::identity::BUILD_PREFIX, &self.id)?;
        if self.user_id.trim().is_empty() {
            return Err(Error::InvalidDocument(format!(
                "Build {} has no owner",
                self.id
            )));
        }
        if self.build_name.trim().is_empty() {
            return Err(Error::InvalidDocument(format!(
                "Build {} has an empty name",
                self.id
            )));
        }
        Ok(())
    }
}

/// User-editable fields of a resource link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDraft {
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Target URL.
    #[serde(default)]
    pub url: String,
    /// Emoji icon.
    #[serde(default)]
    pub icon: Option<String>,
    /// Category the link is shown under.
    #[serde(default)]
    pub category: Option<ResourceCategory>,
    /// Free-form subcategory such as `database` or `trading`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// A curated reference link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Document ID.
    pub id: String,
    /// Owning user; empty for built-in resources.
    #[serde(default)]
    pub user_id: String,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Target URL.
    pub url: String,
    /// Emoji icon.
    #[serde(default)]
    pub icon: Option<String>,
    /// Category the link is shown under.
    pub category: ResourceCategory,
    /// Free-form subcategory.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Whether this resource ships with the dashboard.
    #[serde(default)]
    pub is_default: bool,
    /// Unix timestamp of creation.
    #[serde(default)]
    pub created_at: i64,
    /// Unix timestamp of last update.
    #[serde(default)]
    pub updated_at: i64,
}

impl Resource {
    /// Creates a user resource from a submitted draft.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft has no category.
    pub fn from_draft(
        id: String,
        user_id: String,
        draft: ResourceDraft,
        now: i64,
    ) -> Result<Self> {
        let mut resource = Self {
            id,
            user_id,
            title: String::new(),
            description: String::new(),
            url: String::new(),
            icon: None,
            category: ResourceCategory::Community,
            kind: None,
            is_default: false,
            created_at: now,
            updated_at: now,
        };
        resource.apply(draft, now)?;
        Ok(resource)
    }

    /// Applies the editable fields of a draft and bumps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft has no category.
    pub fn apply(&mut self, draft: ResourceDraft, now: i64) -> Result<()> {
        self.category = draft.category.ok_or_else(|| {
            Error::InvalidDocument("Resource is missing a category".to_string())
        })?;
        self.title = draft.title.trim().to_string();
        self.description = draft.description.trim().to_string();
        self.url = draft.url.trim().to_string();
        self.icon = non_blank(draft.icon);
        self.kind = non_blank(draft.kind);
        self.updated_at = now;
        Ok(())
    }

    /// Returns the editable fields, for pre-filling an edit form.
    #[must_use]
    pub fn to_draft(&self) -> ResourceDraft {
        ResourceDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            icon: self.icon.clone(),
            category: Some(self.category),
            kind: self.kind.clone(),
        }
    }
}

impl Document for Resource {
    fn id(&self) -> &str {
        &self.id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn updated_at(&self) -> i64 {
        self.updated_at
    }

    fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidDocument(
                "Resource ID cannot be empty".to_string(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(Error::InvalidDocument(format!(
                "Resource {} has an empty title",
                self.id
            )));
        }
        if self.url.trim().is_empty() {
            return Err(Error::InvalidDocument(format!(
                "Resource {} has an empty URL",
                self.id
            )));
        }
        Ok(())
    }
}

/// Per-user dashboard preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Owning user; also the document ID.
    pub user_id: String,
    /// Resources the user chose to hide.
    #[serde(default)]
    pub hidden_resource_ids: Vec<String>,
    /// Unix timestamp of last update.
    #[serde(default)]
    pub updated_at: i64,
}

impl UserPreferences {
    /// Returns empty preferences for a user.
    #[must_use]
    pub fn for_user(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            ..Self::default()
        }
    }
}

impl Document for UserPreferences {
    fn id(&self) -> &str {
        &self.user_id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn updated_at(&self) -> i64 {
        self.updated_at
    }

    fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(Error::InvalidDocument(
                "Preferences have no owner".to_string(),
            ));
        }
        Ok(())
    }
}

/// A signed-in user as reported by the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Stable user identifier.
    pub uid: String,
    /// Display name, if the provider shares one.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Email address, if the provider shares one.
    #[serde(default)]
    pub email: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
