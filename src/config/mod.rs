//! Configuration management module.
//!
//! This module handles loading, saving, and validating the application
//! configuration: the category table, display order, row limits, spin timing,
//! theme and hotkeys.

mod catalog;
mod error;
pub mod hotkeys;
mod settings;

pub use catalog::{Catalog, Category};
pub use error::ConfigError;
pub use hotkeys::{HotkeyAction, Hotkeys};
pub use settings::SpinSettings;

use crate::error::AppResult;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "ideas.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/idea-reels";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub categories: HashMap<String, Vec<String>>,
    pub order: Vec<String>,
    pub default_rows: usize,
    pub max_rows: Option<usize>,
    pub spin: SpinSettings,
    pub theme_name: String,
    pub hotkeys: Hotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    pub categories: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub order: Vec<String>,
    #[serde(default = "default_rows")]
    pub default_rows: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rows: Option<usize>,
    #[serde(default)]
    pub spin: SpinSettings,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub hotkeys: Hotkeys,
}

fn default_rows() -> usize {
    2
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_categories() -> HashMap<String, Vec<String>> {
    let table: [(&str, &[&str]); 4] = [
        (
            "Theme",
            &["Time travel", "Isolation", "Rebirth", "Greed", "Found family"],
        ),
        (
            "Genre",
            &["Roguelike", "Puzzle", "Platformer", "City builder", "Rhythm"],
        ),
        (
            "Art Style",
            &["Pixel art", "Low poly", "Watercolor", "Paper cutout", "Neon vector"],
        ),
        (
            "Gameplay",
            &["Deck building", "Stealth", "Physics", "Time loops", "Crafting"],
        ),
    ];
    table
        .iter()
        .map(|(name, options)| {
            (
                name.to_string(),
                options.iter().map(|o| o.to_string()).collect(),
            )
        })
        .collect()
}

fn default_order() -> Vec<String> {
    ["Theme", "Genre", "Art Style", "Gameplay"]
        .iter()
        .map(|n| n.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the built-in sample configuration.
    ///
    pub fn new() -> Config {
        Config {
            categories: default_categories(),
            order: default_order(),
            default_rows: default_rows(),
            max_rows: None,
            spin: SpinSettings::default(),
            theme_name: default_theme_name(),
            hotkeys: hotkeys::default_hotkeys(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If no file exists yet, write the built-in
    /// defaults there so the user has something to edit.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            self.apply(&contents)?;
            info!("Loaded configuration from {}", file_path.display());
        } else {
            info!(
                "No configuration found, writing defaults to {}",
                file_path.display()
            );
            self.save()?;
        }

        Ok(())
    }

    /// Replace the current values with those parsed from YAML contents.
    ///
    fn apply(&mut self, contents: &str) -> Result<(), ConfigError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        let key_map = hotkeys::merge_hotkeys(&data.hotkeys);
        hotkeys::validate_hotkeys(&key_map)?;
        self.categories = data.categories;
        self.order = data.order;
        self.default_rows = data.default_rows;
        self.max_rows = data.max_rows;
        self.spin = data.spin;
        self.theme_name = data.theme_name;
        self.hotkeys = key_map;
        Ok(())
    }

    /// Serialize the configuration data and write it to the disk, returning
    /// any unrecoverable errors.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            categories: self.categories.clone(),
            order: self.order.clone(),
            default_rows: self.default_rows,
            max_rows: self.max_rows,
            spin: self.spin.clone(),
            theme_name: self.theme_name.clone(),
            hotkeys: self.hotkeys.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Validate the category table and row limits, returning the catalog the
    /// application runs on.
    ///
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        self.spin.validate()?;
        Catalog::build(&self.categories, &self.order, self.default_rows, self.max_rows)
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crossterm::event::KeyCode;

    fn scratch_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "idea-reels-{}-{}-{}",
            label,
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn default_config_builds_catalog() {
        let catalog = Config::new().catalog().unwrap();
        assert_eq!(catalog.categories().len(), 4);
        assert_eq!(catalog.default_rows(), 2);
        assert_eq!(catalog.max_rows(), 4);
        assert_eq!(catalog.categories()[0].name, "Theme");
    }

    #[test]
    fn load_writes_defaults_on_first_run() {
        let dir = scratch_dir("first-run");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        let file = dir.join(FILE_NAME);
        assert!(file.exists());
        assert_eq!(config.file_path.as_deref(), Some(file.as_path()));

        let mut reloaded = Config::new();
        reloaded.categories.clear();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.categories, default_categories());
        assert_eq!(reloaded.order, default_order());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reads_partial_file() {
        let dir = scratch_dir("partial");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "categories:\n  Mood:\n    - calm\n    - tense\n  Place:\n    - desert\norder: [Place, Mood]\ndefault_rows: 1\nspin:\n  max_duration_secs: 5.0\nhotkeys:\n  spin:\n    code: Enter\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.order, vec!["Place".to_string(), "Mood".to_string()]);
        assert_eq!(config.default_rows, 1);
        assert_eq!(config.spin.max_duration_secs, 5.0);
        assert_eq!(config.spin.min_duration_secs, 1.0);
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.hotkeys[&HotkeyAction::Spin].code, KeyCode::Enter);
        assert_eq!(config.hotkeys[&HotkeyAction::Quit].code, KeyCode::Char('q'));

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.categories()[0].name, "Place");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_rejects_malformed_yaml() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "categories: [not, a, map").unwrap();

        let mut config = Config::new();
        let err = config.load(dir.to_str()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::DeserializationFailed(_))
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_rejects_hotkey_reusing_another_key() {
        let dir = scratch_dir("hotkey-clash");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "categories:\n  Mood:\n    - calm\nhotkeys:\n  spin:\n    code: Char\n    char: q\n",
        )
        .unwrap();

        let mut config = Config::new();
        let err = config.load(dir.to_str()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::ConflictingHotkeys { .. })
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn catalog_rejects_huge_spin_duration() {
        let mut config = Config::new();
        config.spin.min_duration_secs = 1e20;
        config.spin.max_duration_secs = 1e20;
        assert!(matches!(
            config.catalog(),
            Err(ConfigError::InvalidSpinSetting { .. })
        ));
    }

    #[test]
    fn catalog_rejects_bad_spin_settings() {
        let mut config = Config::new();
        config.spin.min_step_secs = -1.0;
        assert!(matches!(
            config.catalog(),
            Err(ConfigError::InvalidSpinSetting { .. })
        ));
    }

    #[test]
    fn save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }
}
