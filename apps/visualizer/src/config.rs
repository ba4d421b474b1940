use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use sort_engine::{
    config::{DEFAULT_SIZE, DEFAULT_SPEED},
    SortConfig,
};
use tracing::warn;

pub const DEFAULT_SETTINGS_FILE: &str = "visualizer.toml";
const ENV_PREFIX: &str = "SORTVIZ__";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub size: usize,
    pub speed: u32,
    pub algorithm: String,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            speed: DEFAULT_SPEED,
            algorithm: "bubble".into(),
            seed: None,
        }
    }
}

impl Settings {
    pub fn sort_config(&self) -> SortConfig {
        SortConfig::new(self.size, self.speed)
    }
}

/// Defaults, then the settings file, then `SORTVIZ__*` environment overrides.
///
/// An explicit `path` must exist; the default file is optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match path {
        Some(path) => read_settings_file(path)?,
        None => {
            let default_path = PathBuf::from(DEFAULT_SETTINGS_FILE);
            if default_path.exists() {
                read_settings_file(&default_path)?
            } else {
                Settings::default()
            }
        }
    };

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))
}

pub(crate) fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

    if let Some(v) = var("SIZE") {
        match v.parse() {
            Ok(parsed) => settings.size = parsed,
            Err(_) => warn!("ignoring {ENV_PREFIX}SIZE={v}: not a positive integer"),
        }
    }
    if let Some(v) = var("SPEED") {
        match v.parse() {
            Ok(parsed) => settings.speed = parsed,
            Err(_) => warn!("ignoring {ENV_PREFIX}SPEED={v}: not an integer"),
        }
    }
    if let Some(v) = var("ALGORITHM") {
        settings.algorithm = v;
    }
    if let Some(v) = var("SEED") {
        match v.parse() {
            Ok(parsed) => settings.seed = Some(parsed),
            Err(_) => warn!("ignoring {ENV_PREFIX}SEED={v}: not an integer"),
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
