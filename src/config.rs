//! Tool configuration module.
//!
//! Handles loading, validating, and merging `hexicon.toml`. Stock
//! defaults are overridden by an optional config file, and command-line
//! flags override both.
//!
//! ## Config File Location
//!
//! `hexicon.toml` is read from the working directory, or from the
//! directory named by `--config`:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [render]
//! size = 100        # Canvas edge in pixels
//! padding = 0.08    # Blank fraction per edge, in [0, 1)
//! saturation = 0.5  # Palette saturation (0-1)
//!
//! [batch]
//! max_processes = 4 # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse, override just the values you want:
//!
//! ```toml
//! # Only override the canvas size
//! [render]
//! size = 256
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::icon::IconStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the config directory.
pub const CONFIG_FILENAME: &str = "hexicon.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `hexicon.toml`.
///
/// All fields have sensible defaults. User config files need only
/// specify the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Rendering parameters (size, padding, saturation).
    pub render: RenderConfig,
    /// Batch rendering settings.
    pub batch: BatchConfig,
}

impl ToolConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.render
            .style()
            .validate()
            .map_err(|e| ConfigError::Validation(format!("render: {e}")))?;
        if !(self.render.saturation >= 0.0 && self.render.saturation <= 1.0) {
            return Err(ConfigError::Validation(
                "render.saturation must be 0.0-1.0".into(),
            ));
        }
        Ok(())
    }
}

/// Rendering parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Canvas edge in pixels.
    pub size: u32,
    /// Fraction of the canvas left blank on each edge, in `[0, 1)`.
    pub padding: f32,
    /// Palette saturation, 0.0 (grayscale) to 1.0 (fully saturated).
    pub saturation: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: 100,
            padding: 0.08,
            saturation: 0.5,
        }
    }
}

impl RenderConfig {
    /// The engine-level style these settings describe.
    pub fn style(&self) -> IconStyle {
        IconStyle {
            size: self.size,
            padding: self.padding,
            saturation: self.saturation,
        }
    }
}

/// Batch rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Maximum number of parallel rendering workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &BatchConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as
/// the base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ToolConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut merged), toml::Value::Table(overrides)) => {
            for (key, value) in overrides {
                let entry = match merged.remove(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => value,
                };
                merged.insert(key, entry);
            }
            toml::Value::Table(merged)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `hexicon.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `hexicon.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and
/// validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ToolConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ToolConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `hexicon.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<ToolConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `hexicon.toml` with all keys and
/// explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Hexicon Configuration
# =====================
# Every setting is optional; delete any line to fall back to the default
# shown here.
#
# hexicon.toml is read from the working directory, or from the directory
# named by --config. Command-line flags override file values.
# Keys that hexicon does not recognize are rejected.

# ---------------------------------------------------------------------------
# Rendering
# ---------------------------------------------------------------------------
[render]
# Canvas edge in pixels. The icon is always square.
size = 100

# Fraction of the canvas left blank on each edge. 0.0 draws edge to
# edge; values up to (but not including) 1.0 shrink the drawn area.
padding = 0.08

# Palette saturation: 0.0 renders grayscale, 1.0 fully saturated.
saturation = 0.5

# ---------------------------------------------------------------------------
# Batch rendering
# ---------------------------------------------------------------------------
[batch]
# Maximum parallel rendering workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
