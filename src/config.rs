use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Runtime settings for loading and rendering recipes
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Recipe data file used when no path is given explicitly
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    /// Directory prefix for recipe images in rendered cards
    #[serde(default = "default_image_dir")]
    pub image_dir: String,
    /// Search terms shorter than this (in characters) do not filter
    #[serde(default = "default_min_search_len")]
    pub min_search_len: usize,
    /// Descriptions longer than this get a "Voir plus" toggle
    #[serde(default = "default_description_limit")]
    pub description_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            image_dir: default_image_dir(),
            min_search_len: default_min_search_len(),
            description_limit: default_description_limit(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/recipes.json")
}

fn default_image_dir() -> String {
    "JSON recipes".to_string()
}

fn default_min_search_len() -> usize {
    3
}

fn default_description_limit() -> usize {
    200
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PETITSPLATS__ prefix
    /// 2. petits-plats.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PETITSPLATS__MIN_SEARCH_LEN
    pub fn load() -> Result<Self, ConfigError> {
        build(File::with_name("petits-plats").required(false))
    }

    /// Load settings from an explicit TOML file, still honouring environment overrides
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        build(File::from(path).required(true))
    }
}

fn build<S>(file: S) -> Result<Settings, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: PETITSPLATS__IMAGE_DIR
        .add_source(
            Environment::with_prefix("PETITSPLATS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
