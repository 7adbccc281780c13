//! Operator-tunable settings, loaded from TOML.

use log::warn;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub keys: KeyConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Longest frame dimension shown without downscaling, in pixels.
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
    /// Half-size of a segment marker square, in display pixels.
    #[serde(default = "default_marker_size")]
    pub marker_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyConfig {
    #[serde(default = "default_confirm_key")]
    pub confirm: i32,
    #[serde(default = "default_undo_key")]
    pub undo: i32,
    #[serde(default = "default_rotate_key")]
    pub rotate: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

// Default value functions
fn default_max_dimension() -> u32 {
    900
}

fn default_marker_size() -> u32 {
    7
}

fn default_confirm_key() -> i32 {
    crate::event::KEY_CONFIRM
}

fn default_undo_key() -> i32 {
    crate::event::KEY_UNDO
}

fn default_rotate_key() -> i32 {
    crate::event::KEY_ROTATE
}

fn default_output_file() -> String {
    "layout.json".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_dimension: default_max_dimension(),
            marker_size: default_marker_size(),
        }
    }
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            confirm: default_confirm_key(),
            undo: default_undo_key(),
            rotate: default_rotate_key(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
        }
    }
}

/// Path of the config file in the platform config directory.
fn config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "videosetter")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration, preferring an explicit path (with `~` expansion)
/// and falling back to the platform config dir, then to defaults. A broken
/// file is reported and skipped, never fatal.
pub fn load_config(explicit: Option<&str>) -> AppConfig {
    if let Some(p) = explicit {
        let expanded = shellexpand::tilde(p);
        match try_load(Path::new(expanded.as_ref())) {
            Ok(config) => return config,
            Err(e) => warn!("ignoring config '{expanded}': {e}"),
        }
    }

    if let Some(path) = config_path() {
        if path.exists() {
            match try_load(&path) {
                Ok(config) => return config,
                Err(e) => warn!("ignoring config '{}': {e}", path.display()),
            }
        }
    }

    AppConfig::default()
}

fn try_load(path: &Path) -> Result<AppConfig, String> {
    let content = std::fs::read_to_string(path).map_err(|e| format!("read error: {e}"))?;
    toml::from_str(&content).map_err(|e| format!("toml parse error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_bindings() {
        let config = AppConfig::default();
        assert_eq!(config.display.max_dimension, 900);
        assert_eq!(config.display.marker_size, 7);
        assert_eq!(config.keys.confirm, 13);
        assert_eq!(config.keys.undo, 8);
        assert_eq!(config.keys.rotate, 114);
        assert_eq!(config.export.output_file, "layout.json");
    }

    #[test]
    fn partial_toml_fills_missing_fields() {
        let config: AppConfig = toml::from_str("[display]\nmax_dimension = 700\n").unwrap();
        assert_eq!(config.display.max_dimension, 700);
        assert_eq!(config.display.marker_size, 7);
        assert_eq!(config.keys.confirm, 13);
    }
}
