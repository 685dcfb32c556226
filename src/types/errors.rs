use std::fmt;

// === SourceError ===

/// Errors reported by a quote source before normalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The request could not be sent or the connection dropped.
    Network(String),
    /// The request did not complete in time.
    Timeout,
    /// The endpoint answered with a non-success HTTP status.
    Status(u16),
    /// The response body was not a valid quote.
    Parse(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Network(msg) => write!(f, "Quote source network error: {}", msg),
            SourceError::Timeout => write!(f, "Quote source timed out"),
            SourceError::Status(code) => write!(f, "Quote source returned HTTP {}", code),
            SourceError::Parse(msg) => write!(f, "Quote source parse error: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

// === FetchError ===

/// A failed quote fetch, carrying a short message fit for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<SourceError> for FetchError {
    fn from(err: SourceError) -> Self {
        let message = match err {
            SourceError::Network(msg) => format!("network error: {}", msg),
            SourceError::Timeout => "timeout".to_string(),
            SourceError::Status(code) => format!("HTTP {}", code),
            SourceError::Parse(msg) => format!("malformed response: {}", msg),
        };
        Self { message }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FetchError {}

// === StoreError ===

/// Errors from the bookmark store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Database operation failed.
    Database(String),
    /// The background task running the operation did not complete.
    Worker(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Database(msg) => write!(f, "Bookmark database error: {}", msg),
            StoreError::Worker(msg) => write!(f, "Bookmark worker failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

// === ToggleError ===

/// Errors from toggling the current quote's bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleError {
    /// There is no successfully fetched quote to bookmark.
    NoCurrentQuote,
    /// The store rejected the write; the flag is unchanged.
    Store(StoreError),
}

impl fmt::Display for ToggleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleError::NoCurrentQuote => write!(f, "No quote is currently displayed"),
            ToggleError::Store(err) => write!(f, "Bookmark toggle failed: {}", err),
        }
    }
}

impl std::error::Error for ToggleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ToggleError::NoCurrentQuote => None,
            ToggleError::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ToggleError {
    fn from(err: StoreError) -> Self {
        ToggleError::Store(err)
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === AppError ===

/// Errors raised while wiring the application together.
#[derive(Debug)]
pub enum AppError {
    /// The bookmark database could not be opened.
    Database(String),
    /// Settings could not be loaded.
    Settings(SettingsError),
    /// The HTTP client could not be built.
    HttpClient(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Database(msg) => write!(f, "Failed to open bookmark database: {}", msg),
            AppError::Settings(err) => write!(f, "Failed to load settings: {}", err),
            AppError::HttpClient(msg) => write!(f, "Failed to build HTTP client: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Settings(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SettingsError> for AppError {
    fn from(err: SettingsError) -> Self {
        AppError::Settings(err)
    }
}
