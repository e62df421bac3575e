//! Configuration-specific error types.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File path was not set
    #[error("Configuration file path not set")]
    FilePathNotSet,

    /// Failed to find home directory
    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    /// Failed to load configuration file
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration file
    #[error("Failed to save configuration to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create configuration directory
    #[error("Failed to create configuration directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize configuration
    #[error("Failed to serialize configuration: {0}")]
    SerializationFailed(String),

    /// Failed to deserialize configuration
    #[error("Failed to deserialize configuration: {0}")]
    DeserializationFailed(String),

    /// No categories were configured at all
    #[error("No categories configured; add at least one under 'categories'")]
    NoCategories,

    /// A category has an empty option list
    #[error("Category '{name}' has no options")]
    EmptyCategory { name: String },

    /// The display order names a category that does not exist
    #[error("Display order names unknown category '{name}'")]
    UnknownCategory { name: String },

    /// The display order lists a category twice
    #[error("Display order lists category '{name}' more than once")]
    DuplicateCategory { name: String },

    /// Row counts are inconsistent with each other or with the catalog
    #[error("Invalid row limits: {0}")]
    InvalidRowLimits(String),

    /// Two actions share one key combination
    #[error("Key '{key}' is bound to both '{first}' and '{second}'")]
    ConflictingHotkeys {
        key: String,
        first: String,
        second: String,
    },

    /// Spin timing values are out of range
    #[error("Invalid spin setting '{field}': {message}")]
    InvalidSpinSetting { field: &'static str, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::FilePathNotSet;
        assert!(error.to_string().contains("file path not set"));

        let error = ConfigError::HomeDirectoryNotFound;
        assert!(error.to_string().contains("home directory"));

        let error = ConfigError::DeserializationFailed("test".to_string());
        assert!(error.to_string().contains("test"));

        let error = ConfigError::EmptyCategory {
            name: "Genre".to_string(),
        };
        assert_eq!(error.to_string(), "Category 'Genre' has no options");

        let error = ConfigError::InvalidSpinSetting {
            field: "min_step_secs",
            message: "must be positive".to_string(),
        };
        assert!(error.to_string().contains("min_step_secs"));
        assert!(error.to_string().contains("must be positive"));
    }

    #[test]
    fn test_config_error_with_path() {
        let path = PathBuf::from("/test/path");
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "Not found");
        let error = ConfigError::SaveFailed {
            path: path.clone(),
            source: io_error,
        };
        let error_str = error.to_string();
        assert!(error_str.contains("/test/path"));
    }
}
