//! Plugin record types
//!
//! Records are immutable once a store is built. Category and filter values
//! accept the short forms used by older catalog files (`plugins`, `archive`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// Lifecycle state of a plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Maintained and downloadable
    #[serde(alias = "plugins")]
    Active,
    /// Retired, kept for reference
    #[serde(alias = "archive")]
    Archived,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Active, Category::Archived];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }

    /// Human label used in the filter bar
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active Plugins",
            Self::Archived => "Archived",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" | "plugins" => Ok(Self::Active),
            "archived" | "archive" => Ok(Self::Archived),
            _ => Err(SiteError::InvalidCategory {
                value: s.to_string(),
            }),
        }
    }
}

/// Category filter applied by catalog queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    #[serde(alias = "plugins")]
    Active,
    #[serde(alias = "archive")]
    Archived,
}

impl CategoryFilter {
    /// Filter bar order
    pub const ALL: [CategoryFilter; 3] = [
        CategoryFilter::All,
        CategoryFilter::Active,
        CategoryFilter::Archived,
    ];

    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Active => category == Category::Active,
            Self::Archived => category == Category::Archived,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "Everything",
            Self::Active => Category::Active.label(),
            Self::Archived => Category::Archived.label(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::Active => Self::Active,
            Category::Archived => Self::Archived,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        if normalized == "all" {
            return Ok(Self::All);
        }
        normalized
            .parse::<Category>()
            .map(Self::from)
            .map_err(|_| SiteError::InvalidFilter {
                value: s.to_string(),
            })
    }
}

/// Secondary ordering inside a category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Downloads,
    Name,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Downloads => f.write_str("downloads"),
            Self::Name => f.write_str("name"),
        }
    }
}

impl FromStr for SortKey {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "downloads" => Ok(Self::Downloads),
            "name" => Ok(Self::Name),
            _ => Err(SiteError::InvalidSortKey {
                value: s.to_string(),
            }),
        }
    }
}

/// One plugin as listed on the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginRecord {
    /// Unique key
    pub id: String,
    pub name: String,
    /// Rich text; rendered without escaping
    pub description: String,
    pub version: String,
    pub category: Category,
    /// Icon class list, e.g. `fas fa-heart`
    pub icon: String,
    #[serde(default)]
    pub downloads: u64,
    /// Minecraft versions, newest first
    #[serde(default)]
    pub supported_versions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub download_url: String,
    pub documentation_url: String,
}

impl PluginRecord {
    /// Case-insensitive substring match on name, description or any tag.
    /// `needle` must already be lowercase.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }

    pub fn is_archived(&self) -> bool {
        self.category == Category::Archived
    }

    pub fn supports(&self, version: &str) -> bool {
        self.supported_versions.iter().any(|v| v == version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_aliases() {
        assert_eq!("active".parse::<Category>().unwrap(), Category::Active);
        assert_eq!("plugins".parse::<Category>().unwrap(), Category::Active);
        assert_eq!("Archive".parse::<Category>().unwrap(), Category::Archived);
        assert!("retired".parse::<Category>().is_err());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "archive".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Archived
        );
        let err = "everything".parse::<CategoryFilter>().unwrap_err();
        assert!(matches!(err, SiteError::InvalidFilter { .. }));
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Archived));
        assert!(CategoryFilter::Active.matches(Category::Active));
        assert!(!CategoryFilter::Active.matches(Category::Archived));
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("Name".parse::<SortKey>().unwrap(), SortKey::Name);
        assert!("stars".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_record_deserialize_legacy_category() {
        let json = r#"{
            "id": "mobstatus",
            "name": "MobStatus",
            "description": "Mob health bars",
            "version": "Archive",
            "category": "archive",
            "icon": "fa-solid fa-chart-simple",
            "downloads": 109,
            "supportedVersions": ["1.20"],
            "tags": ["mobs"],
            "downloadUrl": "https://example.invalid/d",
            "documentationUrl": "https://example.invalid/docs"
        }"#;
        let record: PluginRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, Category::Archived);
        assert!(record.supports("1.20"));
        assert!(!record.supports("1.2"));
    }
}
