use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".visa_intake";
const CONFIG_FILE: &str = "config.json";
const SESSION_FILE: &str = "session.json";

/// Returns the application data directory, defaulting to `~/.visa_intake`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("VISA_INTAKE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

pub fn session_file_in(base: &std::path::Path) -> PathBuf {
    base.join(SESSION_FILE)
}
