// ============================================================
// Layer 6 — Config Store
// ============================================================
// Reads and writes PipelineConfig as JSON.
//
//   load(path)       a user-written config; any field left out
//                    takes its default value
//
//   save(dir, cfg)   dir/run_config.json, the exact settings an
//                    evaluation report was produced with
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json docs

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::application::config::PipelineConfig;

pub const RUN_CONFIG_FILE: &str = "run_config.json";

pub struct ConfigStore;

impl ConfigStore {
    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<PipelineConfig> {
        let path = path.as_ref();

        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        let cfg = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config file '{}'", path.display()))?;

        tracing::debug!("Loaded config from '{}'", path.display());
        Ok(cfg)
    }

    /// Write `cfg` to `dir/run_config.json`, creating `dir` if needed.
    pub fn save(dir: impl AsRef<Path>, cfg: &PipelineConfig) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create directory '{}'", dir.display()))?;

        let path = dir.join(RUN_CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved run config to '{}'", path.display());
        Ok(path)
    }
}
