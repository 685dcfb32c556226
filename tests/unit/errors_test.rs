use std::error::Error;

use quotesync::types::errors::*;

// === SourceError Tests ===

#[test]
fn source_error_display_variants() {
    assert_eq!(
        SourceError::Network("connection reset".to_string()).to_string(),
        "Quote source network error: connection reset"
    );
    assert_eq!(SourceError::Timeout.to_string(), "Quote source timed out");
    assert_eq!(SourceError::Status(404).to_string(), "Quote source returned HTTP 404");
    assert_eq!(
        SourceError::Parse("missing field `author`".to_string()).to_string(),
        "Quote source parse error: missing field `author`"
    );
}

// === FetchError Tests ===

#[test]
fn fetch_error_displays_its_message_only() {
    let err = FetchError::from(SourceError::Timeout);
    assert_eq!(err.to_string(), "timeout");
    assert_eq!(err.message, "timeout");
}

#[test]
fn fetch_error_from_status() {
    assert_eq!(FetchError::from(SourceError::Status(429)).message, "HTTP 429");
}

// === StoreError Tests ===

#[test]
fn store_error_display_variants() {
    assert_eq!(
        StoreError::Database("database is locked".to_string()).to_string(),
        "Bookmark database error: database is locked"
    );
    assert_eq!(
        StoreError::Worker("task panicked".to_string()).to_string(),
        "Bookmark worker failed: task panicked"
    );
}

#[test]
fn store_error_from_rusqlite() {
    let err = StoreError::from(rusqlite::Error::QueryReturnedNoRows);
    assert!(matches!(err, StoreError::Database(_)));
}

// === ToggleError Tests ===

#[test]
fn toggle_error_no_current_quote() {
    let err = ToggleError::NoCurrentQuote;
    assert_eq!(err.to_string(), "No quote is currently displayed");
    assert!(err.source().is_none());
}

#[test]
fn toggle_error_wraps_store_error() {
    let err = ToggleError::from(StoreError::Database("disk full".to_string()));
    assert_eq!(
        err.to_string(),
        "Bookmark toggle failed: Bookmark database error: disk full"
    );
    assert!(err.source().is_some());
}

// === SettingsError / AppError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::InvalidKey("x.y".to_string()).to_string(),
        "Invalid settings key: x.y"
    );
    assert_eq!(
        SettingsError::InvalidValue("bad".to_string()).to_string(),
        "Invalid settings value: bad"
    );
}

#[test]
fn app_error_exposes_settings_source() {
    let err = AppError::from(SettingsError::IoError("denied".to_string()));
    assert_eq!(
        err.to_string(),
        "Failed to load settings: Settings I/O error: denied"
    );
    assert!(err.source().is_some());
    assert!(AppError::Database("locked".to_string()).source().is_none());
}

#[test]
fn errors_implement_error_trait() {
    let errors: Vec<Box<dyn Error>> = vec![
        Box::new(SourceError::Timeout),
        Box::new(FetchError::new("timeout")),
        Box::new(StoreError::Database("x".to_string())),
        Box::new(ToggleError::NoCurrentQuote),
        Box::new(AppError::HttpClient("x".to_string())),
    ];
    assert_eq!(errors.len(), 5);
}
