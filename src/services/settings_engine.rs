// QuoteSync Settings Engine
// Loads, saves, updates and resets user settings.
// Settings are stored as a JSON file at the platform-specific config path.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::QuotesSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<QuotesSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &QuotesSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: QuotesSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with `settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            settings: QuotesSettings::default(),
        }
    }

    /// Resolves the bookmark database path: absolute paths are used as is,
    /// relative ones are placed in the platform data directory.
    pub fn database_path(&self) -> PathBuf {
        let file = Path::new(&self.settings.storage.database_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            platform::get_data_dir().join(file)
        }
    }

    /// Rejects settings the rest of the crate cannot work with.
    pub fn validate(settings: &QuotesSettings) -> Result<(), SettingsError> {
        let source = &settings.source;
        if source.timeout_secs == 0 {
            return Err(SettingsError::InvalidValue(
                "source.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if !(source.base_url.starts_with("http://") || source.base_url.starts_with("https://")) {
            return Err(SettingsError::InvalidValue(format!(
                "source.base_url must be an http(s) URL: {}",
                source.base_url
            )));
        }
        if settings.storage.database_file.trim().is_empty() {
            return Err(SettingsError::InvalidValue(
                "storage.database_file cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// If the file does not exist, returns default settings.
    /// If the file exists but is malformed, returns a serialization error.
    fn load(&mut self) -> Result<QuotesSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.settings = QuotesSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: QuotesSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        Self::validate(&settings)?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Saves the current settings to the JSON config file, creating parent
    /// directories as needed.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    fn get_settings(&self) -> &QuotesSettings {
        &self.settings
    }

    /// Replaces one leaf setting addressed by a dotted path such as
    /// `source.timeout_secs`, validates the result and saves it. Nothing is
    /// changed or written when the key or value is rejected.
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        let path: Vec<&str> = key.split('.').collect();
        if path.iter().any(|segment| segment.is_empty()) {
            return Err(SettingsError::InvalidKey(format!(
                "Malformed setting key '{}'",
                key
            )));
        }

        let mut tree = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;
        let slot = path.iter().try_fold(&mut tree, |node, segment| {
            node.get_mut(*segment)
                .ok_or_else(|| SettingsError::InvalidKey(format!("Unknown setting '{}'", key)))
        })?;
        if slot.is_object() {
            return Err(SettingsError::InvalidKey(format!(
                "'{}' is a section, not a setting",
                key
            )));
        }
        *slot = value;

        let updated: QuotesSettings = serde_json::from_value(tree).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for '{}': {}", key, e))
        })?;
        Self::validate(&updated)?;

        debug!(key, "setting updated");
        self.settings = updated;
        self.save()
    }

    /// Resets all settings to defaults and saves to disk.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = QuotesSettings::default();
        self.save()?;
        Ok(())
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
