// Rust guideline compliant 2026-10-18

//! Resources that ship with the dashboard.

use crate::{Resource, ResourceCategory};
use std::collections::BTreeMap;

struct Entry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    url: &'static str,
    icon: &'static str,
    category: ResourceCategory,
    kind: &'static str,
}

const DEFAULTS: &[Entry] = &[
    Entry {
        id: "2",
        title: "PoEDB",
        description: "Komplet database og reference",
        url: "https://poedb.tw",
        icon: "📊",
        category: ResourceCategory::Poe1,
        kind: "database",
    },
    Entry {
        id: "3",
        title: "Trade Site",
        description: "Officiel handel og priser",
        url: "https://pathofexile.com/trade",
        icon: "💰",
        category: ResourceCategory::Poe1,
        kind: "trading",
    },
    Entry {
        id: "4",
        title: "poe.ninja",
        description: "Økonomisk analyse og trends",
        url: "https://poe.ninja",
        icon: "📈",
        category: ResourceCategory::Poe1,
        kind: "economy",
    },
    Entry {
        id: "5",
        title: "PoE2DB",
        description: "Database for Path of Exile 2",
        url: "https://poe2db.tw",
        icon: "🆕",
        category: ResourceCategory::Poe2,
        kind: "database",
    },
    Entry {
        id: "6",
        title: "Maxroll PoE2",
        description: "Detaljerede guides og builds",
        url: "https://maxroll.gg/poe2",
        icon: "📚",
        category: ResourceCategory::Poe2,
        kind: "guide",
    },
    Entry {
        id: "7",
        title: "Mobalytics",
        description: "Build guides og analyser",
        url: "https://mobalytics.gg/poe-2",
        icon: "📋",
        category: ResourceCategory::Poe2,
        kind: "guide",
    },
    Entry {
        id: "15",
        title: "Awakened PoE Trade",
        description: "In-game overlay til hurtig handel og priser for PoE1",
        url: "https://github.com/SnosMe/awakened-poe-trade",
        icon: "⚡",
        category: ResourceCategory::Programs,
        kind: "overlay",
    },
    Entry {
        id: "16",
        title: "Exiled Exchange 2",
        description: "Avanceret trading tool for PoE2",
        url: "https://github.com/Kvan7/Exiled-Exchange-2",
        icon: "🔄",
        category: ResourceCategory::Programs,
        kind: "trading",
    },
    Entry {
        id: "17",
        title: "Path of Building",
        description: "Build planning værktøj",
        url: "https://pathofbuilding.community",
        icon: "🔧",
        category: ResourceCategory::Programs,
        kind: "tool",
    },
    Entry {
        id: "8",
        title: "r/PathOfExile",
        description: "Reddit community og diskussioner",
        url: "https://reddit.com/r/pathofexile",
        icon: "💬",
        category: ResourceCategory::Community,
        kind: "community",
    },
    Entry {
        id: "9",
        title: "Official Discord",
        description: "Live chat og support",
        url: "https://discord.gg/pathofexile",
        icon: "🗨️",
        category: ResourceCategory::Community,
        kind: "community",
    },
    Entry {
        id: "10",
        title: "PoE Wiki",
        description: "Omfattende reference guide",
        url: "https://pathofexile.fandom.com",
        icon: "📖",
        category: ResourceCategory::Community,
        kind: "wiki",
    },
    Entry {
        id: "13",
        title: "PoE Builds",
        description: "Community build-samling og guides",
        url: "https://www.poebuilds.net",
        icon: "🏗️",
        category: ResourceCategory::Community,
        kind: "builds",
    },
];

/// Returns the built-in resources, in catalog order.
#[must_use]
pub fn default_resources() -> Vec<Resource> {
    DEFAULTS
        .iter()
        .map(|entry| Resource {
            id: entry.id.to_string(),
            user_id: String::new(),
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            url: entry.url.to_string(),
            icon: Some(entry.icon.to_string()),
            category: entry.category,
            kind: Some(entry.kind.to_string()),
            is_default: true,
            created_at: 0,
            updated_at: 0,
        })
        .collect()
}

/// Combines built-in and user resources, drops hidden ones, and groups the
/// rest by category in display order. Empty categories are omitted.
#[must_use]
pub fn visible_by_category(
    custom: &[Resource],
    hidden_ids: &[String],
) -> Vec<(ResourceCategory, Vec<Resource>)> {
    let mut groups: BTreeMap<ResourceCategory, Vec<Resource>> = BTreeMap::new();

    for resource in default_resources().into_iter().chain(custom.iter().cloned()) {
        if hidden_ids.iter().any(|id| *id == resource.id) {
            continue;
        }
        groups.entry(resource.category).or_default().push(resource);
    }

    ResourceCategory::ORDER
        .iter()
        .filter_map(|category| groups.remove(category).map(|items| (*category, items)))
        .collect()
}
