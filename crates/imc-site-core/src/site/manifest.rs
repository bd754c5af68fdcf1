use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::Result;

pub const MANIFEST_FILENAME: &str = ".imc-site-manifest.toml";

/// Files produced by the last build, with their content hashes
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildManifest {
    pub built: BuildInfo,
    pub files: BTreeMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BuildInfo {
    pub built_at: DateTime<Utc>,
    pub generator: String,
}

impl BuildManifest {
    pub fn new() -> Self {
        Self {
            built: BuildInfo {
                built_at: Utc::now(),
                generator: format!("imc-site {}", env!("CARGO_PKG_VERSION")),
            },
            files: BTreeMap::new(),
        }
    }

    pub fn load(out_dir: &Path) -> Result<Option<Self>> {
        let path = out_dir.join(MANIFEST_FILENAME);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let manifest: BuildManifest = toml::from_str(&content)?;
        Ok(Some(manifest))
    }

    pub fn save(&self, out_dir: &Path) -> Result<()> {
        let path = out_dir.join(MANIFEST_FILENAME);
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    pub fn add_file(&mut self, path: &str, hash: &str) {
        self.files.insert(path.to_string(), hash.to_string());
    }

    pub fn get_file_hash(&self, path: &str) -> Option<&String> {
        self.files.get(path)
    }
}

impl Default for BuildManifest {
    fn default() -> Self {
        Self::new()
    }
}

pub fn compute_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let result = hasher.finalize();
    format!("sha256:{}", hex::encode(result))
}

pub fn compute_file_hash(path: &Path) -> Result<String> {
    let content = fs::read(path)?;
    Ok(compute_hash(&content))
}
