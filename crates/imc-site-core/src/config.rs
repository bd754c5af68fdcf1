use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

pub const CONFIG_FILE: &str = "site.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# imc-site configuration file
# Location: <project>/site.toml

[site]
# Site name shown in the navigation bar and page titles
title = "InternationalMC"

# Output directory, relative to the project directory
out_dir = "dist"

# Static files copied into <out_dir>/assets (stylesheets, images)
# Example: assets_dir = "assets"
# assets_dir = "assets"

# Glob patterns of asset files to skip
# Example: assets_exclude = ["*.psd", "drafts/*"]
assets_exclude = []

[catalog]
# Plugin catalog file (.toml or .json); the builtin catalog is used when unset
# source = "plugins.toml"

# Delay between card entrance animations, in milliseconds
stagger_ms = 50

[terms]
# Terms of Service document (.json); the builtin document is used when unset
# source = "terms.json"

# Show the "recently updated" badge when the terms changed within this many days
recent_days = 30
"#;

/// Project configuration (`site.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub terms: TermsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteSection {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,

    #[serde(default)]
    pub assets_exclude: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TermsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    #[serde(default = "default_recent_days")]
    pub recent_days: i64,
}

fn default_title() -> String {
    "InternationalMC".to_string()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_stagger_ms() -> u64 {
    50
}

fn default_recent_days() -> i64 {
    30
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            out_dir: default_out_dir(),
            assets_dir: None,
            assets_exclude: Vec::new(),
        }
    }
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            source: None,
            stagger_ms: default_stagger_ms(),
        }
    }
}

impl Default for TermsSection {
    fn default() -> Self {
        Self {
            source: None,
            recent_days: default_recent_days(),
        }
    }
}

impl Config {
    /// Load config from the project directory
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| SiteError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        if config.terms.recent_days < 0 {
            return Err(SiteError::InvalidConfigValue {
                key: "terms.recent_days".to_string(),
                value: config.terms.recent_days.to_string(),
            });
        }

        Ok(config)
    }

    /// Save config to the project directory
    pub fn save(&self, project_dir: &Path) -> Result<()> {
        let path = project_dir.join(CONFIG_FILE);
        fs::create_dir_all(project_dir)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(project_dir: &Path) -> PathBuf {
        project_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(project_dir: &Path) -> Result<PathBuf> {
        let path = project_dir.join(CONFIG_FILE);
        fs::create_dir_all(project_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Resolve a configured path against the project directory
    pub fn resolve(project_dir: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_dir.join(path)
        }
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        self.list()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || SiteError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "site.title" => self.site.title = value.to_string(),
            "site.out_dir" => self.site.out_dir = PathBuf::from(value),
            "site.assets_dir" => self.site.assets_dir = optional_path(value),
            "site.assets_exclude" => self.site.assets_exclude = parse_string_list(value),
            "catalog.source" => self.catalog.source = optional_path(value),
            "catalog.stagger_ms" => {
                self.catalog.stagger_ms = value.trim().parse().map_err(|_| invalid())?
            }
            "terms.source" => self.terms.source = optional_path(value),
            "terms.recent_days" => {
                let days: i64 = value.trim().parse().map_err(|_| invalid())?;
                if days < 0 {
                    return Err(invalid());
                }
                self.terms.recent_days = days;
            }
            _ => {
                return Err(SiteError::ConfigKeyNotFound {
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        let path_or_empty =
            |p: &Option<PathBuf>| p.as_ref().map(|p| p.display().to_string()).unwrap_or_default();

        vec![
            ("site.title".to_string(), self.site.title.clone()),
            ("site.out_dir".to_string(), self.site.out_dir.display().to_string()),
            ("site.assets_dir".to_string(), path_or_empty(&self.site.assets_dir)),
            (
                "site.assets_exclude".to_string(),
                format!("{:?}", self.site.assets_exclude),
            ),
            ("catalog.source".to_string(), path_or_empty(&self.catalog.source)),
            ("catalog.stagger_ms".to_string(), self.catalog.stagger_ms.to_string()),
            ("terms.source".to_string(), path_or_empty(&self.terms.source)),
            ("terms.recent_days".to_string(), self.terms.recent_days.to_string()),
        ]
    }
}

/// Empty string clears an optional path
fn optional_path(value: &str) -> Option<PathBuf> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

/// Parse a comma-separated or JSON-like list string
fn parse_string_list(value: &str) -> Vec<String> {
    let trimmed = value.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    inner
        .split(',')
        .map(|s| s.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_list_comma() {
        assert_eq!(parse_string_list("*.psd,drafts/*"), vec!["*.psd", "drafts/*"]);
    }

    #[test]
    fn test_parse_string_list_json() {
        assert_eq!(parse_string_list(r#"["*.psd", "*.tmp"]"#), vec!["*.psd", "*.tmp"]);
        assert!(parse_string_list("[]").is_empty());
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_missing_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_init_then_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = Config::init(dir.path()).unwrap();
        assert!(path.exists());

        let mut config = Config::load(dir.path()).unwrap();
        config.set("catalog.source", "plugins.json").unwrap();
        config.set("catalog.stagger_ms", "80").unwrap();
        config.save(dir.path()).unwrap();

        let reloaded = Config::load(dir.path()).unwrap();
        assert_eq!(reloaded.catalog.source, Some(PathBuf::from("plugins.json")));
        assert_eq!(reloaded.catalog.stagger_ms, 80);
    }

    #[test]
    fn test_config_get_set() {
        let mut config = Config::default();

        config.set("site.assets_exclude", "*.psd,*.tmp").unwrap();
        assert_eq!(config.site.assets_exclude, vec!["*.psd", "*.tmp"]);
        assert_eq!(config.get("site.title").as_deref(), Some("InternationalMC"));
        assert!(config.get("site.unknown").is_none());

        config.set("site.assets_dir", "").unwrap();
        assert!(config.site.assets_dir.is_none());
    }

    #[test]
    fn test_config_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("catalog.stagger_ms", "fast"),
            Err(SiteError::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            config.set("terms.recent_days", "-1"),
            Err(SiteError::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            config.set("nope", "1"),
            Err(SiteError::ConfigKeyNotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[site\ntitle = ").unwrap();
        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(err, SiteError::ConfigParse { .. }));
    }

    #[test]
    fn test_load_rejects_negative_recent_days() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[terms]\nrecent_days = -5\n").unwrap();
        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            SiteError::InvalidConfigValue { ref key, .. } if key == "terms.recent_days"
        ));
    }

    #[test]
    fn test_resolve_relative_paths() {
        let base = Path::new("/project");
        assert_eq!(
            Config::resolve(base, Path::new("dist")),
            PathBuf::from("/project/dist")
        );
        assert_eq!(
            Config::resolve(base, Path::new("/tmp/out")),
            PathBuf::from("/tmp/out")
        );
    }
}
