// QuoteSync platform paths for Linux
// Config: ~/.config/quotesync
// Data:   ~/.local/share/quotesync

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Uses `$XDG_CONFIG_HOME/quotesync` if set, otherwise `~/.config/quotesync`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("quotesync"),
        _ => home_dir().join(".config").join("quotesync"),
    }
}

/// Uses `$XDG_DATA_HOME/quotesync` if set, otherwise `~/.local/share/quotesync`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("quotesync"),
        _ => home_dir().join(".local").join("share").join("quotesync"),
    }
}
