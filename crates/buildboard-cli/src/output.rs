// Rust guideline compliant 2026-10-18

//! Output formatting for the buildboard CLI.
//!
//! Every command renders through an [`OutputFormatter`]: tables for people,
//! response envelopes for scripts.

use buildboard_app::{AppError, ErrorEnvelope, SuccessEnvelope};
use buildboard_core::display::{format_last_opened, guide_indicator, guide_text, status_text};
use buildboard_core::{Build, Resource, ResourceCategory};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

/// Renders command results and errors.
pub trait OutputFormatter {
    /// Formats one build in detail.
    fn format_build(&self, build: &Build) -> String;

    /// Formats a build list.
    fn format_builds(&self, builds: &[Build]) -> String;

    /// Formats one resource in detail.
    fn format_resource(&self, resource: &Resource) -> String;

    /// Formats resources grouped by category.
    fn format_resources(&self, groups: &[(ResourceCategory, Vec<Resource>)]) -> String;

    /// Formats the outcome of a command without a document to show.
    ///
    /// Tables print `message`; JSON prints `result`.
    fn format_ack(&self, message: &str, result: serde_json::Value) -> String;

    /// Formats a failed command.
    fn format_error(&self, error: &AppError) -> String;
}

/// JSON output formatter.
pub struct JsonFormatter;

impl JsonFormatter {
    fn envelope<T: Serialize>(result: T) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(result)).unwrap_or_else(|_| {
            json!({ "status": "error", "message": "Failed to serialize result" }).to_string()
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_build(&self, build: &Build) -> String {
        Self::envelope(build)
    }

    fn format_builds(&self, builds: &[Build]) -> String {
        Self::envelope(json!({ "builds": builds, "total": builds.len() }))
    }

    fn format_resource(&self, resource: &Resource) -> String {
        Self::envelope(resource)
    }

    fn format_resources(&self, groups: &[(ResourceCategory, Vec<Resource>)]) -> String {
        let categories: Vec<serde_json::Value> = groups
            .iter()
            .map(|(category, resources)| json!({ "category": category, "resources": resources }))
            .collect();
        Self::envelope(json!({ "categories": categories }))
    }

    fn format_ack(&self, _message: &str, result: serde_json::Value) -> String {
        Self::envelope(result)
    }

    fn format_error(&self, error: &AppError) -> String {
        serde_json::to_string_pretty(&ErrorEnvelope::from_error(error))
            .unwrap_or_else(|_| json!({ "status": "error", "message": error.to_string() }).to_string())
    }
}

/// Table output formatter.
///
/// Relative times ("2 timer siden") are computed against the clock reading
/// given at construction.
pub struct TableFormatter {
    now: DateTime<Utc>,
}

impl TableFormatter {
    /// Creates a table formatter that renders times relative to `now`.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

fn or_dash(value: Option<&String>) -> &str {
    value.map_or("-", String::as_str)
}

impl OutputFormatter for TableFormatter {
    fn format_build(&self, build: &Build) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:          {}\n", build.id));
        output.push_str(&format!("Navn:        {}\n", build.build_name));
        output.push_str(&format!("Spil:        {}\n", build.game_version));
        output.push_str(&format!("Status:      {}\n", status_text(build.build_status)));
        output.push_str(&format!(
            "Guide:       {} {}\n",
            guide_indicator(build.guide_status),
            guide_text(build.guide_status)
        ));
        if let Some(character) = &build.character_name {
            output.push_str(&format!("Character:   {character}\n"));
        }
        if let Some(league) = &build.league {
            output.push_str(&format!("League:      {league}\n"));
        }
        if let Some(link) = &build.pob_link {
            output.push_str(&format!("PoB:         {link}\n"));
        }
        if let Some(link) = &build.guide_link {
            output.push_str(&format!("Guide link:  {link}\n"));
        }
        if let Some(notes) = build.notes.as_deref().filter(|n| !n.is_empty()) {
            output.push_str(&format!("Noter:       {notes}\n"));
        }
        output.push_str(&format!(
            "Sidst åbnet: {}\n",
            format_last_opened(build.last_opened, self.now)
        ));

        output
    }

    fn format_builds(&self, builds: &[Build]) -> String {
        if builds.is_empty() {
            return "Ingen builds fundet.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Navn", "Spil", "Character", "Status", "Guide", "Sidst åbnet"]);

        for build in builds {
            builder.push_record(vec![
                build.id.clone(),
                build.build_name.clone(),
                build.game_version.to_string(),
                or_dash(build.character_name.as_ref()).to_string(),
                status_text(build.build_status).to_string(),
                guide_indicator(build.guide_status).to_string(),
                format_last_opened(build.last_opened, self.now),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_resource(&self, resource: &Resource) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:           {}\n", resource.id));
        output.push_str(&format!("Titel:        {}\n", resource.title));
        output.push_str(&format!("Beskrivelse:  {}\n", resource.description));
        output.push_str(&format!("URL:          {}\n", resource.url));
        output.push_str(&format!("Kategori:     {}\n", resource.category));
        if let Some(icon) = &resource.icon {
            output.push_str(&format!("Ikon:         {icon}\n"));
        }

        output
    }

    fn format_resources(&self, groups: &[(ResourceCategory, Vec<Resource>)]) -> String {
        if groups.is_empty() {
            return "Ingen ressourcer fundet.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Kategori", "ID", "Titel", "URL"]);

        for (category, resources) in groups {
            for resource in resources {
                let title = match &resource.icon {
                    Some(icon) => format!("{icon} {}", resource.title),
                    None => resource.title.clone(),
                };
                builder.push_record(vec![
                    category.label().to_string(),
                    resource.id.clone(),
                    title,
                    resource.url.clone(),
                ]);
            }
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_ack(&self, message: &str, _result: serde_json::Value) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &AppError) -> String {
        let mut output = format!("Fejl: {error}");
        if let AppError::Validation(errors) = error {
            for (field, message) in errors.iter() {
                output.push_str(&format!("\n  {field}: {message}"));
            }
        }
        output
    }
}

/// Creates the formatter for the requested mode.
pub fn create_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter::new(Utc::now()))
    }
}
