//! Builtin catalog
//!
//! The plugins published on the site when no catalog file is configured.

use super::record::{Category, PluginRecord};

pub const BUILTIN_PLUGINS: &[BuiltinPlugin] = &[
    // Active
    BuiltinPlugin {
        id: "reviews",
        name: "Reviews",
        description: "Let your players review your server (★★★☆☆). \
                      Your Administration, Gameplay or/and Community.<br>",
        version: "v1.0.1",
        category: Category::Active,
        icon: "fa-solid fa-star",
        downloads: 38,
        supported_versions: &["1.21", "1.20", "1.19"],
        tags: &["reviews", "social", "comments"],
        download_url: "https://modrinth.com/plugin/reviews#download",
        documentation_url: "https://modrinth.com/plugin/reviews",
    },
    BuiltinPlugin {
        id: "valentines",
        name: "Valentines",
        description: "Original Valentines plugin. Everything in one; \
                      Marriages, Leaderboards, Moods, Chat symbols and more.<br>",
        version: "v3.0.0",
        category: Category::Active,
        icon: "fas fa-heart",
        downloads: 156,
        supported_versions: &["1.21", "1.20", "1.19"],
        tags: &["social", "friends", "cosmetic"],
        download_url: "https://modrinth.com/plugin/valentines#download",
        documentation_url: "https://modrinth.com/plugin/valentines",
    },
    // Archived
    BuiltinPlugin {
        id: "mobstatus",
        name: "MobStatus",
        description: "All mobs names, levels, healthbar and rarity just above them \
                      with particles and animations.<br>",
        version: "Archive",
        category: Category::Archived,
        icon: "fa-solid fa-chart-simple",
        downloads: 109,
        supported_versions: &["1.20"],
        tags: &["holo", "stats", "particles", "mobs"],
        download_url: "https://modrinth.com/plugin/mobstatus#download",
        documentation_url: "https://modrinth.com/plugin/mobstatus",
    },
];

/// Static definition of a builtin plugin
#[derive(Debug, Clone)]
pub struct BuiltinPlugin {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub category: Category,
    pub icon: &'static str,
    pub downloads: u64,
    pub supported_versions: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub download_url: &'static str,
    pub documentation_url: &'static str,
}

impl From<&BuiltinPlugin> for PluginRecord {
    fn from(builtin: &BuiltinPlugin) -> Self {
        Self {
            id: builtin.id.to_string(),
            name: builtin.name.to_string(),
            description: builtin.description.to_string(),
            version: builtin.version.to_string(),
            category: builtin.category,
            icon: builtin.icon.to_string(),
            downloads: builtin.downloads,
            supported_versions: builtin
                .supported_versions
                .iter()
                .map(|s| s.to_string())
                .collect(),
            tags: builtin.tags.iter().map(|s| s.to_string()).collect(),
            download_url: builtin.download_url.to_string(),
            documentation_url: builtin.documentation_url.to_string(),
        }
    }
}
