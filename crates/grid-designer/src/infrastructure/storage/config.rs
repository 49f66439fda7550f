//! TOML-based configuration persistence for the designer.
//!
//! Reads and writes [`DesignerConfig`] to the platform-appropriate config file:
//! - Windows:  `%APPDATA%\GridDesigner\config.toml`
//! - Linux:    `~/.config/griddesigner/config.toml`
//! - macOS:    `~/Library/Application Support/GridDesigner/config.toml`
//!
//! The CLI's `--config <PATH>` bypasses the platform lookup through
//! [`load_config_from`].
//!
//! # What is TOML? (for beginners)
//!
//! TOML (Tom's Obvious Minimal Language) is a configuration file format designed
//! to be easy to read and write.  It looks similar to INI files but with more
//! data types.  Example:
//!
//! ```toml
//! [grid]
//! desktop_columns = 8
//! target_columns = 2
//!
//! [defaults]
//! color = "#336699"
//! ```
//!
//! # Serde default values
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return value
//! of `some_fn()` when the field is absent from the TOML file.  Every section
//! is itself `#[serde(default)]`, so an empty file (or no file at all) yields
//! the built-in defaults.
//!
//! Out-of-range numbers are accepted here and clamped when the settings reach
//! the layout engine.

use std::path::{Path, PathBuf};

use grid_core::{ModuleKind, ModuleSpec, ResponsiveMode, DEFAULT_HISTORY_CAPACITY};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::controller::ControllerSettings;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level designer configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DesignerConfig {
    #[serde(default)]
    pub designer: GeneralConfig,
    #[serde(default)]
    pub grid: GridSection,
    #[serde(default)]
    pub defaults: ModuleDefaults,
    #[serde(default)]
    pub history: HistorySection,
}

/// General designer behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Schema version string – bump when breaking changes are introduced.
    #[serde(default = "default_version")]
    pub version: String,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Initial grid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridSection {
    #[serde(default = "default_desktop_columns")]
    pub desktop_columns: i64,
    #[serde(default = "default_target_columns")]
    pub target_columns: i64,
    #[serde(default = "default_gap")]
    pub desktop_gap: i64,
    #[serde(default = "default_gap")]
    pub mobile_gap: i64,
    /// Only `"reflow"` is functional; other modes fall back to it.
    #[serde(default)]
    pub responsive_mode: ResponsiveMode,
}

/// Field values for newly added modules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModuleDefaults {
    #[serde(default = "default_span")]
    pub col: i64,
    #[serde(default = "default_span")]
    pub row: i64,
    #[serde(default)]
    pub kind: ModuleKind,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub transparent: bool,
    #[serde(default = "default_border_color")]
    pub border_color: String,
    #[serde(default)]
    pub border_width: i64,
}

/// Undo history settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistorySection {
    /// Maximum number of snapshots kept for undo.
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_version() -> String {
    "1.0".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_desktop_columns() -> i64 {
    6
}
fn default_target_columns() -> i64 {
    2
}
fn default_gap() -> i64 {
    10
}
fn default_span() -> i64 {
    2
}
fn default_color() -> String {
    ModuleSpec::default().color
}
fn default_border_color() -> String {
    ModuleSpec::default().border_color
}
fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            log_level: default_log_level(),
        }
    }
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            desktop_columns: default_desktop_columns(),
            target_columns: default_target_columns(),
            desktop_gap: default_gap(),
            mobile_gap: default_gap(),
            responsive_mode: ResponsiveMode::default(),
        }
    }
}

impl Default for ModuleDefaults {
    fn default() -> Self {
        Self {
            col: default_span(),
            row: default_span(),
            kind: ModuleKind::default(),
            color: default_color(),
            transparent: false,
            border_color: default_border_color(),
            border_width: 0,
        }
    }
}

impl Default for HistorySection {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
        }
    }
}

// ── Conversion to engine settings ─────────────────────────────────────────────

impl DesignerConfig {
    /// Builds controller settings, clamping every number into engine range.
    pub fn controller_settings(&self) -> ControllerSettings {
        let mut grid =
            grid_core::GridConfig::new(self.grid.desktop_columns, self.grid.target_columns);
        grid.set_desktop_gap(self.grid.desktop_gap);
        grid.set_mobile_gap(self.grid.mobile_gap);

        ControllerSettings {
            grid,
            responsive_mode: self.grid.responsive_mode,
            module_defaults: ModuleSpec {
                col: self.defaults.col,
                row: self.defaults.row,
                kind: self.defaults.kind,
                color: self.defaults.color.clone(),
                transparent: self.defaults.transparent,
                border_color: self.defaults.border_color.clone(),
                border_width: self.defaults.border_width,
            },
            history_capacity: self.history.capacity,
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads [`DesignerConfig`] from the platform config file, returning the
/// defaults if the file does not yet exist.
///
/// # Errors
///
/// See [`load_config_from`].
pub fn load_config() -> Result<DesignerConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Loads [`DesignerConfig`] from `path`, returning the defaults if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<DesignerConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: DesignerConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(DesignerConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Persists `config` to the platform config file.
///
/// # Errors
///
/// See [`save_config_to`].
pub fn save_config(config: &DesignerConfig) -> Result<(), ConfigError> {
    save_config_to(&config_file_path()?, config)
}

/// Persists `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config_to(path: &Path, config: &DesignerConfig) -> Result<(), ConfigError> {
    // Ensure directory exists before writing.
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config directory, including the app subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("GridDesigner"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("griddesigner"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("GridDesigner")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("grid_designer_test_{}", Uuid::new_v4()))
    }

    // ── defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn test_designer_config_default_matches_engine_defaults() {
        // Arrange / Act
        let cfg = DesignerConfig::default();

        // Assert
        assert_eq!(cfg.grid.desktop_columns, 6);
        assert_eq!(cfg.grid.target_columns, 2);
        assert_eq!(cfg.grid.desktop_gap, 10);
        assert_eq!(cfg.grid.mobile_gap, 10);
        assert_eq!(cfg.grid.responsive_mode, ResponsiveMode::Reflow);
        assert_eq!(cfg.history.capacity, 100);
        assert_eq!(cfg.designer.log_level, "info");
    }

    #[test]
    fn test_module_defaults_match_module_spec_default() {
        let settings = DesignerConfig::default().controller_settings();
        assert_eq!(settings.module_defaults, ModuleSpec::default());
    }

    // ── TOML parsing ──────────────────────────────────────────────────────────

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let cfg: DesignerConfig = toml::from_str("").expect("deserialize empty");
        assert_eq!(cfg, DesignerConfig::default());
    }

    #[test]
    fn test_deserialize_partial_grid_overrides_defaults() {
        // Arrange
        let toml_str = r#"
[grid]
desktop_columns = 8

[defaults]
kind = "image"
"#;

        // Act
        let cfg: DesignerConfig = toml::from_str(toml_str).expect("deserialize partial");

        // Assert
        assert_eq!(cfg.grid.desktop_columns, 8);
        // Unspecified fields keep their defaults
        assert_eq!(cfg.grid.target_columns, 2);
        assert_eq!(cfg.defaults.kind, ModuleKind::Image);
        assert_eq!(cfg.defaults.col, 2);
    }

    #[test]
    fn test_deserialize_invalid_toml_returns_parse_error() {
        let result: Result<DesignerConfig, toml::de::Error> = toml::from_str("[[[ not valid toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_designer_config_serializes_and_deserializes_round_trip() {
        // Arrange
        let mut cfg = DesignerConfig::default();
        cfg.grid.desktop_columns = 10;
        cfg.defaults.color = "#112233".to_string();

        // Act
        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: DesignerConfig = toml::from_str(&toml_str).expect("deserialize");

        // Assert
        assert_eq!(cfg, restored);
    }

    // ── controller_settings ───────────────────────────────────────────────────

    #[test]
    fn test_controller_settings_clamps_out_of_range_values() {
        // Arrange
        let mut cfg = DesignerConfig::default();
        cfg.grid.desktop_columns = 40;
        cfg.grid.target_columns = 0;
        cfg.grid.desktop_gap = 500;
        cfg.grid.mobile_gap = -1;

        // Act
        let settings = cfg.controller_settings();

        // Assert
        assert_eq!(settings.grid.desktop_columns(), 12);
        assert_eq!(settings.grid.target_columns(), 1);
        assert_eq!(settings.grid.desktop_gap(), 50);
        assert_eq!(settings.grid.mobile_gap(), 0);
    }

    // ── load / save on disk ───────────────────────────────────────────────────

    #[test]
    fn test_load_config_from_missing_file_returns_default() {
        let path = temp_dir().join("config.toml");

        let cfg = load_config_from(&path).expect("missing file is not an error");

        assert_eq!(cfg, DesignerConfig::default());
    }

    #[test]
    fn test_save_and_load_config_round_trip_via_temp_dir() {
        // Arrange
        let dir = temp_dir();
        let path = dir.join("nested").join("config.toml");
        let mut cfg = DesignerConfig::default();
        cfg.history.capacity = 25;
        cfg.designer.log_level = "debug".to_string();

        // Act
        save_config_to(&path, &cfg).expect("save creates directories");
        let loaded = load_config_from(&path).expect("load");

        // Assert
        assert_eq!(loaded.history.capacity, 25);
        assert_eq!(loaded.designer.log_level, "debug");

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_config_from_malformed_file_returns_parse_error() {
        // Arrange
        let dir = temp_dir();
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, "[grid\ndesktop_columns = ").expect("write");

        // Act
        let result = load_config_from(&path);

        // Assert
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }

    // ── config_dir path formation ─────────────────────────────────────────────

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        if let Ok(path) = config_file_path() {
            assert!(
                path.ends_with("config.toml"),
                "config file must be named config.toml, got {path:?}"
            );
        }
        // NoPlatformConfigDir (e.g. in a stripped CI env) is also acceptable.
    }
}
