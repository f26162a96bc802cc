use memo_markup_engine::{DisplayOptions, MarkupOptions, OffsetUnit, RenderOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

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

    #[error("Failed to parse config text: {source}")]
    ConfigTextParseError { source: toml::de::Error },
}

/// Rendering preferences. Missing keys take their defaults; unknown keys are an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Height of the spacer a blank line renders as.
    pub spacer_height: f32,
    /// Unit of styled-run offsets.
    pub offset_unit: OffsetUnit,
    /// Wrap markup output in a complete HTML document.
    pub standalone_markup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spacer_height: DisplayOptions::default().spacer_height,
            offset_unit: OffsetUnit::default(),
            standalone_markup: false,
        }
    }
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

        let config = toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Parses config text handed over by a host rather than read from disk.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::ConfigTextParseError { source })
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

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/memo-markup");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            display: DisplayOptions {
                spacer_height: self.spacer_height,
            },
            markup: MarkupOptions {
                standalone: self.standalone_markup,
                title: None,
            },
            offset_unit: self.offset_unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/memo-markup/config.toml"));
    }

    #[test]
    fn test_defaults_match_engine() {
        let config = Config::default();

        assert_eq!(config.render_options(), RenderOptions::default());
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let config = Config::from_toml_str("offset_unit = \"utf16\"").unwrap();

        assert_eq!(config.offset_unit, OffsetUnit::Utf16);
        assert_eq!(config.spacer_height, 8.0);
        assert!(!config.standalone_markup);
    }

    #[test]
    fn test_empty_text_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_toml_str("notes_path = \"/tmp\"").unwrap_err();

        assert!(matches!(err, ConfigError::ConfigTextParseError { .. }));
    }

    #[test]
    fn test_bad_offset_unit_is_rejected() {
        assert!(Config::from_toml_str("offset_unit = \"bytes\"").is_err());
    }

    #[test]
    fn test_render_options_carry_every_setting() {
        let config = Config {
            spacer_height: 12.5,
            offset_unit: OffsetUnit::Utf8,
            standalone_markup: true,
        };

        let options = config.render_options();

        assert_eq!(options.display.spacer_height, 12.5);
        assert!(options.markup.standalone);
        assert_eq!(options.markup.title, None);
        assert_eq!(options.offset_unit, OffsetUnit::Utf8);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "spacer_height = \"tall\"").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        match err {
            ConfigError::ConfigParseError { config_path, .. } => {
                assert_eq!(config_path, config_file)
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            spacer_height: 4.0,
            offset_unit: OffsetUnit::Utf16,
            standalone_markup: true,
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_saved_file_is_readable_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        Config::default().save_to_path(&config_file).unwrap();
        let content = std::fs::read_to_string(&config_file).unwrap();

        assert!(content.contains("offset_unit = \"char\""));
        assert!(content.contains("standalone_markup = false"));
    }
}
