//! Static asset collection

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::{Result, SiteError};

/// Output prefix for copied assets
pub const ASSETS_PREFIX: &str = "assets";

/// Collected asset files keyed by their output path
#[derive(Debug, Default)]
pub struct CollectedAssets {
    pub files: BTreeMap<String, Vec<u8>>,
    /// Relative paths skipped by an exclude pattern
    pub excluded: Vec<String>,
}

pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| SiteError::InvalidConfigValue {
                key: "site.assets_exclude".to_string(),
                value: format!("{} ({})", p, e),
            })
        })
        .collect()
}

/// Read every file under `dir` not matching an exclude pattern.
/// A missing directory yields nothing.
pub fn collect_assets(dir: &Path, exclude: &[Pattern]) -> Result<CollectedAssets> {
    let mut collected = CollectedAssets::default();

    if !dir.is_dir() {
        tracing::warn!(path = %dir.display(), "assets directory not found, skipped");
        return Ok(collected);
    }

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| SiteError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(dir) else {
            continue;
        };
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if exclude.iter().any(|p| p.matches(&relative)) {
            tracing::debug!(file = %relative, "asset excluded");
            collected.excluded.push(relative);
            continue;
        }

        let content = fs::read(entry.path())?;
        collected
            .files
            .insert(format!("{}/{}", ASSETS_PREFIX, relative), content);
    }

    Ok(collected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_with_excludes() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("img")).unwrap();
        fs::write(dir.path().join("style.css"), "body {}").unwrap();
        fs::write(dir.path().join("img/logo.png"), [0u8, 1, 2]).unwrap();
        fs::write(dir.path().join("draft.psd"), "x").unwrap();

        let patterns = compile_patterns(&["*.psd".to_string()]).unwrap();
        let assets = collect_assets(dir.path(), &patterns).unwrap();

        let keys: Vec<_> = assets.files.keys().cloned().collect();
        assert_eq!(keys, vec!["assets/img/logo.png", "assets/style.css"]);
        assert_eq!(assets.excluded, vec!["draft.psd"]);
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let assets = collect_assets(&dir.path().join("nope"), &[]).unwrap();
        assert!(assets.files.is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        let err = compile_patterns(&["[".to_string()]).unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfigValue { .. }));
    }
}
