use anyhow::{Context, Result};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::CodeKillerError;
use crate::model::{Language, ProjectType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub root: String,
    /// Where downloads, exports and previews are written.
    pub out_dir: String,
    pub generation_delay_ms: u64,
    pub project_type: ProjectType,
    pub language: Language,
    /// JSON or YAML list of projects replacing the built-in demo seed.
    pub seed_file: Option<String>,
    pub progress: bool,
    pub save_artifacts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: ".".into(),
            out_dir: "out".into(),
            generation_delay_ms: 2000,
            project_type: ProjectType::Web,
            language: Language::JavaScript,
            seed_file: None,
            progress: true,
            save_artifacts: true,
        }
    }
}

impl Config {
    /// Load from a `.toml`, `.yaml`/`.yml` or `.json` file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let cfg: Config = match ext.as_str() {
            "toml" => toml::from_str(&raw)
                .with_context(|| format!("invalid TOML in {}", path.display()))?,
            "yaml" | "yml" => serde_yaml::from_str(&raw)
                .with_context(|| format!("invalid YAML in {}", path.display()))?,
            "json" => serde_json::from_str(&raw)
                .with_context(|| format!("invalid JSON in {}", path.display()))?,
            other => {
                return Err(CodeKillerError::Config(format!(
                    "unsupported config extension {:?} for {}",
                    other,
                    path.display()
                ))
                .into())
            }
        };
        Ok(cfg)
    }

    pub fn load_or_default(path: Option<&str>) -> Result<Config> {
        match path {
            Some(p) => Config::load(Path::new(p)),
            None => Ok(Config::default()),
        }
    }
}
