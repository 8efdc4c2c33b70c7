use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::gallery::{TransitionTiming, DEFAULT_FILTER};
use crate::ui::action::parse_action;
use crate::util::paths::config_path;

use super::default_keys::default_keybindings;
use super::keys::{parse_key_notation, KeyContext, KeybindingConfig};

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// A visual filter button: label shown in the filter bar, token sent to the gallery
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilterPreset {
    pub label: String,
    pub token: String,
}

impl FilterPreset {
    pub fn new(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
        }
    }
}

fn default_filters() -> Vec<FilterPreset> {
    vec![
        FilterPreset::new("None", DEFAULT_FILTER),
        FilterPreset::new("Grayscale", "grayscale"),
        FilterPreset::new("Sepia", "sepia"),
        FilterPreset::new("Blur", "blur"),
        FilterPreset::new("Bright", "brightness"),
        FilterPreset::new("Contrast", "contrast"),
        FilterPreset::new("Hue", "hue-rotate"),
        FilterPreset::new("Invert", "invert"),
    ]
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Fade and reveal delays
    pub timing: TransitionTiming,
    /// Horizontal drag distance (columns) that counts as a swipe
    pub swipe_threshold: u16,
    /// Grid tile size in cells
    pub tile_width: u16,
    pub tile_height: u16,
    /// Filter bar presets, in display order
    pub filters: Vec<FilterPreset>,
    /// Keybinding configuration
    pub keybindings: KeybindingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timing: TransitionTiming::default(),
            swipe_threshold: 10,
            tile_width: 28,
            tile_height: 7,
            filters: default_filters(),
            keybindings: default_keybindings(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlTimingConfig {
    pub open_fade_ms: Option<u64>,
    pub close_fade_ms: Option<u64>,
    pub swap_fade_ms: Option<u64>,
    pub loading_ms: Option<u64>,
    pub reveal_stagger_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlInputConfig {
    pub swipe_threshold: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlLayoutConfig {
    pub tile_width: Option<u16>,
    pub tile_height: Option<u16>,
}

/// TOML representation of keybinding configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlKeybindings {
    /// Bindings active in every context
    pub global: Option<HashMap<String, String>>,
    /// Tile grid keybindings
    pub grid: Option<HashMap<String, String>>,
    /// Search box keybindings
    pub search: Option<HashMap<String, String>>,
    /// Lightbox keybindings
    pub lightbox: Option<HashMap<String, String>>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub timing: Option<TomlTimingConfig>,
    pub input: Option<TomlInputConfig>,
    pub layout: Option<TomlLayoutConfig>,
    pub filters: Option<Vec<FilterPreset>>,
    pub keys: Option<TomlKeybindings>,
}

impl TomlKeybindings {
    /// Convert TOML keybindings to KeybindingConfig
    fn to_keybinding_config(&self) -> KeybindingConfig {
        let mut config = KeybindingConfig::new();

        if let Some(global) = &self.global {
            for (action_name, key_str) in global {
                match (parse_key_notation(key_str), parse_action(action_name)) {
                    (Ok(combo), Some(action)) => {
                        config.global.insert(combo, action);
                    }
                    _ => tracing::warn!(
                        action = %action_name,
                        key = %key_str,
                        "Ignoring invalid keybinding"
                    ),
                }
            }
        }

        if let Some(grid) = &self.grid {
            parse_context_bindings(&mut config, KeyContext::Grid, grid);
        }
        if let Some(search) = &self.search {
            parse_context_bindings(&mut config, KeyContext::Search, search);
        }
        if let Some(lightbox) = &self.lightbox {
            parse_context_bindings(&mut config, KeyContext::Lightbox, lightbox);
        }

        config
    }
}

/// Parse context-specific keybindings
fn parse_context_bindings(
    config: &mut KeybindingConfig,
    context: KeyContext,
    bindings: &HashMap<String, String>,
) {
    let context_map = config.context.entry(context).or_default();
    for (action_name, key_str) in bindings {
        match (parse_key_notation(key_str), parse_action(action_name)) {
            (Ok(combo), Some(action)) => {
                context_map.insert(combo, action);
            }
            _ => tracing::warn!(
                ?context,
                action = %action_name,
                key = %key_str,
                "Ignoring invalid keybinding"
            ),
        }
    }
}

impl Config {
    /// Load configuration from the data directory, merging with defaults
    ///
    /// A missing or broken file never stops the gallery: problems are logged
    /// and the defaults are used.
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        if !config_file.exists() {
            return Config::default();
        }

        match Self::load_from(&config_file) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Using default configuration");
                Config::default()
            }
        }
    }

    /// Load an explicit configuration file, merging with defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let toml_config =
            toml::from_str::<TomlConfig>(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut config = Config::default();
        config.apply(toml_config);
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    fn apply(&mut self, toml_config: TomlConfig) {
        if let Some(timing) = toml_config.timing {
            let ms = Duration::from_millis;
            if let Some(v) = timing.open_fade_ms {
                self.timing.open_fade = ms(v);
            }
            if let Some(v) = timing.close_fade_ms {
                self.timing.close_fade = ms(v);
            }
            if let Some(v) = timing.swap_fade_ms {
                self.timing.swap_fade = ms(v);
            }
            if let Some(v) = timing.loading_ms {
                self.timing.loading = ms(v);
            }
            if let Some(v) = timing.reveal_stagger_ms {
                self.timing.reveal_stagger = ms(v);
            }
        }

        if let Some(threshold) = toml_config.input.and_then(|input| input.swipe_threshold) {
            self.swipe_threshold = threshold;
        }

        if let Some(layout) = toml_config.layout {
            // Tiles need room for a border and a caption line
            if let Some(width) = layout.tile_width {
                self.tile_width = width.max(8);
            }
            if let Some(height) = layout.tile_height {
                self.tile_height = height.max(4);
            }
        }

        if let Some(filters) = toml_config.filters {
            if filters.is_empty() {
                tracing::warn!("Empty [[filters]] list, keeping the built-in presets");
            } else {
                self.filters = filters;
            }
        }

        // Merge user keybindings on top of defaults
        if let Some(keys) = toml_config.keys {
            self.keybindings.merge(keys.to_keybinding_config());
        }
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    /// Index of the filter preset carrying `token`
    pub fn filter_index(&self, token: &str) -> Option<usize> {
        self.filters.iter().position(|preset| preset.token == token)
    }
}
