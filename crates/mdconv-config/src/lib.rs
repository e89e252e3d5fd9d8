use mdconv_engine::{ConfigurationError, ConvertParams, Converter, Format, Preset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "MDCONV_CONFIG";

/// Preset used when neither the caller nor the config names one.
pub const FALLBACK_PRESET: Preset = Preset::Plain;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Unknown preset {0:?}")]
    UnknownPreset(String),

    #[error("Preset {name:?} is invalid: {source}")]
    InvalidPreset {
        name: String,
        source: ConfigurationError,
    },
}

/// A user-defined preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPreset {
    #[serde(flatten)]
    pub params: ConvertParams,
    /// Escape `& < > " '` in the input before converting.
    #[serde(default)]
    pub escape_html: bool,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_preset: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub presets: BTreeMap<String, CustomPreset>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// `$MDCONV_CONFIG` if set, otherwise `~/.config/mdconv/config.toml`.
    pub fn config_path() -> PathBuf {
        Self::config_path_from(std::env::var(CONFIG_ENV).ok().as_deref())
    }

    fn config_path_from(override_path: Option<&str>) -> PathBuf {
        if let Some(path) = override_path.filter(|p| !p.is_empty()) {
            let path = PathBuf::from(path);
            return Self::expand_path(&path).unwrap_or(path);
        }
        let config_dir = shellexpand::tilde("~/.config/mdconv");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    /// Built-in preset names followed by custom ones not shadowing them.
    pub fn preset_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Preset::ALL.iter().map(|p| p.name().to_string()).collect();
        for name in self.presets.keys() {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }

    /// Resolves a preset by name, falling back to `default_preset` and then
    /// to [`FALLBACK_PRESET`]. Custom presets shadow built-in ones.
    pub fn converter(&self, name: Option<&str>) -> Result<Converter, ConfigError> {
        let name = name
            .or(self.default_preset.as_deref())
            .unwrap_or(FALLBACK_PRESET.name());

        if let Some(custom) = self.presets.get(name) {
            log::debug!("Using custom preset {name:?}");
            let format =
                Format::try_from(&custom.params).map_err(|source| ConfigError::InvalidPreset {
                    name: name.to_string(),
                    source,
                })?;
            return Ok(Converter::new(format, custom.escape_html));
        }

        log::debug!("Using built-in preset {name:?}");
        name.parse::<Preset>()
            .map(Preset::converter)
            .map_err(|_| ConfigError::UnknownPreset(name.to_string()))
    }
}
