// QuoteSync platform abstraction
// Resolves where settings and the bookmark database live on each OS.
//
// Uses `cfg(target_os)` to select the platform-specific implementation at
// compile time; other targets fall back to the working directory.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for QuoteSync.
///
/// - **Linux**: `~/.config/quotesync` (or `$XDG_CONFIG_HOME/quotesync`)
/// - **macOS**: `~/Library/Application Support/QuoteSync`
/// - **Windows**: `%APPDATA%/QuoteSync`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from(".quotesync")
    }
}

/// Returns the platform-specific data directory for QuoteSync.
///
/// - **Linux**: `~/.local/share/quotesync` (or `$XDG_DATA_HOME/quotesync`)
/// - **macOS**: `~/Library/Application Support/QuoteSync`
/// - **Windows**: `%APPDATA%/QuoteSync`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from(".quotesync")
    }
}
