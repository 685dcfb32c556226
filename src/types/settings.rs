use serde::{Deserialize, Serialize};

/// Top-level settings container, persisted as `settings.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct QuotesSettings {
    pub source: SourceSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

/// Where random quotes come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceSettings {
    pub base_url: String,
    pub random_path: String,
    pub timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            random_path: "/api/random".to_string(),
            timeout_secs: 10,
        }
    }
}

impl SourceSettings {
    /// Full URL of the random-quote endpoint.
    pub fn random_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.random_path.trim_start_matches('/')
        )
    }
}

/// Where bookmarks are stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    /// Database file name, resolved against the platform data directory
    /// unless absolute.
    pub database_file: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_file: "bookmarks.db".to_string(),
        }
    }
}

/// Log verbosity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// A `tracing` filter directive such as `info` or `quotesync=debug`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
