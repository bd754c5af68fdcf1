//! Catalog Store
//!
//! Owns the plugin records and the single query state. Queries never touch
//! the records; they return borrowed, ordered views.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::builtin::BUILTIN_PLUGINS;
use super::record::{Category, CategoryFilter, PluginRecord, SortKey};
use crate::error::{Result, SiteError};

/// Current filter, search term and sort key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub filter: CategoryFilter,
    pub search: String,
    pub sort: SortKey,
}

/// Aggregates over the full, unfiltered catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStatistics<'a> {
    pub total_plugins: usize,
    pub total_downloads: u64,
    pub category_counts: BTreeMap<Category, usize>,
    /// First record with the highest download count
    pub most_downloaded: Option<&'a PluginRecord>,
}

/// Filter bar entry with the number of records it would show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCount {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub count: usize,
}

/// Multi-field search; every populated field must match
#[derive(Debug, Clone, Default)]
pub struct AdvancedCriteria {
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    pub category: Option<CategoryFilter>,
    pub min_downloads: Option<u64>,
    /// Exact supported version
    pub version: Option<String>,
    /// Matches when the record carries any of these tags
    pub tags: Vec<String>,
}

/// On-disk catalog layout (`[[plugins]]` in TOML, `{"plugins": [...]}` in JSON)
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    plugins: Vec<PluginRecord>,
}

#[derive(Debug, Clone)]
pub struct CatalogStore {
    plugins: Vec<PluginRecord>,
    state: QueryState,
}

impl CatalogStore {
    /// Build a store, rejecting duplicate ids
    pub fn new(plugins: Vec<PluginRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for plugin in &plugins {
            if !seen.insert(plugin.id.as_str()) {
                return Err(SiteError::DuplicatePlugin {
                    id: plugin.id.clone(),
                });
            }
        }
        Ok(Self {
            plugins,
            state: QueryState::default(),
        })
    }

    /// Store holding the builtin plugins
    pub fn builtin() -> Self {
        Self {
            plugins: BUILTIN_PLUGINS.iter().map(PluginRecord::from).collect(),
            state: QueryState::default(),
        }
    }

    /// Load a catalog from a `.toml` or `.json` file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let parsed: CatalogFile = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&content).map_err(|e| SiteError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
            Some("json") => serde_json::from_str(&content).map_err(|e| SiteError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
            _ => {
                return Err(SiteError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };
        tracing::debug!(path = %path.display(), plugins = parsed.plugins.len(), "loaded catalog");
        Self::new(parsed.plugins)
    }

    /// Serialize all records as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        let file = CatalogFile {
            plugins: self.plugins.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// All records in insertion order
    pub fn plugins(&self) -> &[PluginRecord] {
        &self.plugins
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Records matching `filter` and `search`, active first, then by downloads
    pub fn query(&self, filter: CategoryFilter, search: &str) -> Vec<&PluginRecord> {
        self.query_sorted(filter, search, SortKey::Downloads)
    }

    /// Query using the current state, including its sort key
    pub fn current_view(&self) -> Vec<&PluginRecord> {
        self.query_sorted(self.state.filter, &self.state.search, self.state.sort)
    }

    fn query_sorted(&self, filter: CategoryFilter, search: &str, sort: SortKey) -> Vec<&PluginRecord> {
        let needle = search.to_lowercase();
        let mut results: Vec<&PluginRecord> = self
            .plugins
            .iter()
            .filter(|p| filter.matches(p.category))
            .filter(|p| p.matches_search(&needle))
            .collect();

        // Stable: equal keys keep insertion order
        results.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| compare_within_category(a, b, sort))
        });
        results
    }

    pub fn find_by_id(&self, id: &str) -> Option<&PluginRecord> {
        self.plugins.iter().find(|p| p.id == id)
    }

    /// Records in a category, unsorted
    pub fn by_category(&self, filter: CategoryFilter) -> Vec<&PluginRecord> {
        self.plugins
            .iter()
            .filter(|p| filter.matches(p.category))
            .collect()
    }

    pub fn statistics(&self) -> CatalogStatistics<'_> {
        let mut category_counts = BTreeMap::new();
        for plugin in &self.plugins {
            *category_counts.entry(plugin.category).or_insert(0) += 1;
        }

        let most_downloaded = self.plugins.iter().fold(None, |max: Option<&PluginRecord>, p| {
            match max {
                Some(m) if p.downloads <= m.downloads => Some(m),
                _ => Some(p),
            }
        });

        CatalogStatistics {
            total_plugins: self.plugins.len(),
            total_downloads: self.plugins.iter().map(|p| p.downloads).sum(),
            category_counts,
            most_downloaded,
        }
    }

    /// Count per filter bar entry, in filter bar order
    pub fn filter_counts(&self) -> Vec<FilterCount> {
        CategoryFilter::ALL
            .iter()
            .map(|&filter| FilterCount {
                filter,
                label: filter.label(),
                count: self.by_category(filter).len(),
            })
            .collect()
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.state.filter = filter;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.state.search = term.into();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.state.sort = sort;
    }

    /// Records listing `version` as supported (exact match)
    pub fn compatible_plugins(&self, version: &str) -> Vec<&PluginRecord> {
        self.plugins.iter().filter(|p| p.supports(version)).collect()
    }

    /// Records matching every populated criterion, in insertion order
    pub fn advanced_search(&self, criteria: &AdvancedCriteria) -> Vec<&PluginRecord> {
        let name = criteria.name.as_ref().map(|n| n.to_lowercase());

        self.plugins
            .iter()
            .filter(|p| match &name {
                Some(n) => p.name.to_lowercase().contains(n.as_str()),
                None => true,
            })
            .filter(|p| criteria.category.map_or(true, |f| f.matches(p.category)))
            .filter(|p| criteria.min_downloads.map_or(true, |min| p.downloads >= min))
            .filter(|p| criteria.version.as_deref().map_or(true, |v| p.supports(v)))
            .filter(|p| criteria.tags.is_empty() || criteria.tags.iter().any(|t| p.tags.contains(t)))
            .collect()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::builtin()
    }
}

fn compare_within_category(a: &PluginRecord, b: &PluginRecord, sort: SortKey) -> Ordering {
    match sort {
        SortKey::Downloads => b.downloads.cmp(&a.downloads),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, category: Category, downloads: u64) -> PluginRecord {
        PluginRecord {
            id: id.to_string(),
            name: id.to_string(),
            description: format!("{} description", id),
            version: "v1.0.0".to_string(),
            category,
            icon: "fas fa-cube".to_string(),
            downloads,
            supported_versions: vec!["1.20".to_string()],
            tags: vec![],
            download_url: format!("https://example.invalid/{}", id),
            documentation_url: format!("https://example.invalid/{}/docs", id),
        }
    }

    fn ids(records: &[&PluginRecord]) -> Vec<String> {
        records.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_query_example_order() {
        let store = CatalogStore::builtin();
        let all = store.query(CategoryFilter::All, "");
        assert_eq!(ids(&all), vec!["valentines", "reviews", "mobstatus"]);

        let archived = store.query(CategoryFilter::Archived, "");
        assert_eq!(ids(&archived), vec!["mobstatus"]);

        let valentine = store.query(CategoryFilter::All, "VALENTINE");
        assert_eq!(ids(&valentine), vec!["valentines"]);
    }

    #[test]
    fn test_query_filter_only_matching_category() {
        let store = CatalogStore::builtin();
        for filter in CategoryFilter::ALL {
            let results = store.query(filter, "");
            assert!(results.iter().all(|p| filter.matches(p.category)));
            assert_eq!(results.len(), store.by_category(filter).len());
        }
        assert_eq!(store.query(CategoryFilter::All, "").len(), store.len());
    }

    #[test]
    fn test_query_search_fields() {
        let store = CatalogStore::builtin();
        // tag only
        assert_eq!(ids(&store.query(CategoryFilter::All, "particles")), vec!["mobstatus"]);
        // description only
        assert_eq!(ids(&store.query(CategoryFilter::All, "marriages")), vec!["valentines"]);
        // shared tag
        assert_eq!(
            ids(&store.query(CategoryFilter::All, "Social")),
            vec!["valentines", "reviews"]
        );
        assert!(store.query(CategoryFilter::All, "no-such-plugin").is_empty());
        assert!(store.query(CategoryFilter::Archived, "social").is_empty());
    }

    #[test]
    fn test_query_sort_order_invariant() {
        let store = CatalogStore::new(vec![
            record("a", Category::Archived, 900),
            record("b", Category::Active, 5),
            record("c", Category::Active, 50),
            record("d", Category::Archived, 10),
            record("e", Category::Active, 50),
        ])
        .unwrap();

        let results = store.query(CategoryFilter::All, "");
        for pair in results.windows(2) {
            let (r1, r2) = (pair[0], pair[1]);
            let ok = (r1.category == Category::Active && r2.category == Category::Archived)
                || (r1.category == r2.category && r1.downloads >= r2.downloads);
            assert!(ok, "{} before {}", r1.id, r2.id);
        }
        // ties keep insertion order
        assert_eq!(ids(&results), vec!["c", "e", "b", "a", "d"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = CatalogStore::new(vec![
            record("x", Category::Active, 1),
            record("x", Category::Archived, 2),
        ])
        .unwrap_err();
        assert!(matches!(err, SiteError::DuplicatePlugin { id } if id == "x"));
    }

    #[test]
    fn test_find_by_id() {
        let store = CatalogStore::builtin();
        assert_eq!(store.find_by_id("reviews").map(|p| p.downloads), Some(38));
        assert!(store.find_by_id("missing").is_none());
    }

    #[test]
    fn test_statistics_ignore_query_state() {
        let mut store = CatalogStore::builtin();
        store.set_filter(CategoryFilter::Archived);
        store.set_search("mob");

        let stats = store.statistics();
        assert_eq!(stats.total_plugins, 3);
        assert_eq!(stats.total_downloads, 38 + 156 + 109);
        assert_eq!(stats.category_counts.get(&Category::Active), Some(&2));
        assert_eq!(stats.category_counts.get(&Category::Archived), Some(&1));
        assert_eq!(stats.most_downloaded.map(|p| p.id.as_str()), Some("valentines"));
    }

    #[test]
    fn test_statistics_most_downloaded_first_on_tie() {
        let store = CatalogStore::new(vec![
            record("first", Category::Archived, 7),
            record("second", Category::Active, 7),
        ])
        .unwrap();
        assert_eq!(
            store.statistics().most_downloaded.map(|p| p.id.as_str()),
            Some("first")
        );
    }

    #[test]
    fn test_statistics_empty_store() {
        let store = CatalogStore::new(Vec::new()).unwrap();
        let stats = store.statistics();
        assert_eq!(stats.total_plugins, 0);
        assert_eq!(stats.total_downloads, 0);
        assert!(stats.most_downloaded.is_none());
    }

    #[test]
    fn test_setters_update_state_only() {
        let mut store = CatalogStore::builtin();
        assert_eq!(store.state(), &QueryState::default());

        store.set_filter(CategoryFilter::Active);
        store.set_search("rev");
        store.set_sort(SortKey::Name);

        assert_eq!(store.state().filter, CategoryFilter::Active);
        assert_eq!(store.state().search, "rev");
        assert_eq!(store.len(), 3);
        assert_eq!(ids(&store.current_view()), vec!["reviews"]);
    }

    #[test]
    fn test_current_view_sort_by_name() {
        let mut store = CatalogStore::builtin();
        store.set_sort(SortKey::Name);
        assert_eq!(
            ids(&store.current_view()),
            vec!["reviews", "valentines", "mobstatus"]
        );
    }

    #[test]
    fn test_compatible_plugins_exact_match() {
        let store = CatalogStore::builtin();
        assert_eq!(ids(&store.compatible_plugins("1.20")).len(), 3);
        assert_eq!(
            ids(&store.compatible_plugins("1.21")),
            vec!["reviews", "valentines"]
        );
        assert!(store.compatible_plugins("1.2").is_empty());
    }

    #[test]
    fn test_filter_counts() {
        let store = CatalogStore::builtin();
        let counts = store.filter_counts();
        assert_eq!(counts[0].label, "Everything");
        assert_eq!(counts[0].count, 3);
        assert_eq!(counts[1].count, 2);
        assert_eq!(counts[2].count, 1);
    }

    #[test]
    fn test_advanced_search() {
        let store = CatalogStore::builtin();

        let criteria = AdvancedCriteria {
            min_downloads: Some(100),
            ..Default::default()
        };
        assert_eq!(ids(&store.advanced_search(&criteria)), vec!["valentines", "mobstatus"]);

        let criteria = AdvancedCriteria {
            category: Some(CategoryFilter::Active),
            tags: vec!["comments".to_string(), "friends".to_string()],
            version: Some("1.19".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&store.advanced_search(&criteria)), vec!["reviews", "valentines"]);

        let criteria = AdvancedCriteria {
            name: Some("STATUS".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&store.advanced_search(&criteria)), vec!["mobstatus"]);
    }

    #[test]
    fn test_from_file_toml_and_json() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("plugins.toml");
        fs::write(
            &toml_path,
            r#"
[[plugins]]
id = "homes"
name = "Homes"
description = "Set homes"
version = "v0.1.0"
category = "plugins"
icon = "fas fa-house"
downloads = 12
supportedVersions = ["1.21"]
tags = ["teleport"]
downloadUrl = "https://example.invalid/homes"
documentationUrl = "https://example.invalid/homes/docs"
"#,
        )
        .unwrap();
        let store = CatalogStore::from_file(&toml_path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.plugins()[0].category, Category::Active);

        let json_path = dir.path().join("plugins.json");
        fs::write(&json_path, store.to_json().unwrap()).unwrap();
        let reloaded = CatalogStore::from_file(&json_path).unwrap();
        assert_eq!(reloaded.plugins(), store.plugins());
    }

    #[test]
    fn test_from_file_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plugins.yaml");
        fs::write(&path, "plugins: []").unwrap();
        let err = CatalogStore::from_file(&path).unwrap_err();
        assert!(matches!(err, SiteError::UnsupportedFormat { .. }));
    }
}
