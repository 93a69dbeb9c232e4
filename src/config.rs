//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/course-planner/course-planner.toml`
//! 3. Local config: `<dir>/.course-planner.toml`
//! 4. Environment variables: `COURSE_PLANNER_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Catalog ingestion settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IngestConfig {
    /// Drop the first non-blank line of a catalog file
    pub skip_header: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self { skip_header: true }
    }
}

/// Document-store settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    /// TOML file holding `[[courses]]` documents
    pub path: Option<PathBuf>,
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub catalog: Option<PathBuf>,
    pub ingest: RawIngestConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawIngestConfig {
    pub skip_header: Option<bool>,
}

/// Unified configuration for course-planner.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Catalog file used when `--catalog` is not given
    pub catalog: Option<PathBuf>,
    pub ingest: IngestConfig,
    pub store: StoreConfig,
}

/// Get the XDG config directory for course-planner.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "course-planner").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("course-planner.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".course-planner.toml")
}

/// Expand `~`, `$VAR` and `${VAR}`; unresolvable input is returned unchanged.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(expand_env_vars(path.to_string_lossy().as_ref()))
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        self.catalog = self.catalog.as_deref().map(expand_path);
        self.store.path = self.store.path.as_deref().map(expand_path);
    }

    /// Overlay config onto self: specified values win, the rest is kept.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            catalog: overlay.catalog.clone().or_else(|| self.catalog.clone()),
            ingest: IngestConfig {
                skip_header: overlay
                    .ingest
                    .skip_header
                    .unwrap_or(self.ingest.skip_header),
            },
            store: StoreConfig {
                path: overlay
                    .store
                    .path
                    .clone()
                    .or_else(|| self.store.path.clone()),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding `.course-planner.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply COURSE_PLANNER_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("COURSE_PLANNER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("catalog") {
            settings.catalog = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_bool("ingest.skip_header") {
            settings.ingest.skip_header = val;
        }
        if let Ok(val) = config.get_string("store.path") {
            settings.store.path = Some(PathBuf::from(val));
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# course-planner configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/course-planner/course-planner.toml
#   Local:  ./.course-planner.toml
#   Env:    COURSE_PLANNER_* environment variables (e.g. COURSE_PLANNER_INGEST__SKIP_HEADER=false)

# Catalog file used when --catalog is not given
# catalog = "~/courses/catalog.csv"

[ingest]
# Treat the first non-blank line of a catalog as a header row
# skip_header = true

[store]
# Document store: TOML file with [[courses]] tables
# (course_id, course_name, prerequisite_1..prerequisite_3)
# path = "~/courses/store.toml"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
