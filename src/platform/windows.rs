// QuoteSync platform paths for Windows
// Config and data: %APPDATA%\QuoteSync

use std::env;
use std::path::PathBuf;

fn app_data() -> PathBuf {
    match env::var("APPDATA") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let profile = env::var("USERPROFILE").unwrap_or_else(|_| String::from("C:\\"));
            PathBuf::from(profile).join("AppData").join("Roaming")
        }
    }
}

pub fn get_config_dir() -> PathBuf {
    app_data().join("QuoteSync")
}

pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}
