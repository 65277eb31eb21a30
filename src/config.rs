use crate::error::ConfigError;
use crate::indentation::IndentOptions;
use crate::markers::{MarkerConfig, MarkerTheme};
use crate::tooltip::PositionOptions;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const QUALIFIER: &str = "co.huggingface";
const ORGANIZATION: &str = "Chatplate";
const APPLICATION: &str = "chatplate";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Editor settings shared by the marker plugin and tooltips
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub tab_size: usize,
    pub indent_unit: usize,
    pub markers: MarkerConfig,
    pub theme: MarkerTheme,
    pub tooltip: PositionOptions,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            tab_size: 4,
            indent_unit: 2,
            // the template editor keeps block highlighting off
            markers: MarkerConfig {
                highlight_active_block: false,
                hide_first_indent: false,
            },
            theme: MarkerTheme::default(),
            tooltip: PositionOptions::default(),
        }
    }
}

impl EditorConfig {
    pub fn indent_options(&self) -> IndentOptions {
        IndentOptions {
            tab_size: self.tab_size,
            unit_width: self.indent_unit,
        }
    }
}

pub fn config_file_path() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

pub fn parse_config(path: &Path, contents: &str) -> Result<EditorConfig, ConfigError> {
    toml::from_str::<EditorConfig>(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_config(path: &Path) -> Result<EditorConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(path, &contents)
}

/// Load the configuration, falling back to defaults when the file is
/// missing or broken
pub fn load_or_default(path: &Path) -> EditorConfig {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return EditorConfig::default();
    }

    match load_config(path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("{err}; using default configuration");
            EditorConfig::default()
        }
    }
}

pub fn save_config(path: &Path, config: &EditorConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let toml = toml::to_string_pretty(config)?;

    fs::write(path, toml).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
