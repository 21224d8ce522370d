use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    errors::{IntakeError, Result},
    utils::{paths, persistence},
};

pub const DEFAULT_API_BASE_URL: &str = "https://backend.dubai-golden-recedency.com/api";
pub const DEFAULT_STORAGE_BASE_URL: &str = "https://backend.dubai-golden-recedency.com/storage";
const DEFAULT_REDIRECT_DELAY_MS: u64 = 2000;
const DEFAULT_PAGE_SIZE: usize = 3;

const ENV_API_BASE_URL: &str = "VISA_INTAKE_API_BASE_URL";
const ENV_STORAGE_BASE_URL: &str = "VISA_INTAKE_STORAGE_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub storage_base_url: String,
    pub redirect_delay_ms: u64,
    pub dashboard_page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            storage_base_url: DEFAULT_STORAGE_BASE_URL.into(),
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
            dashboard_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Applies `VISA_INTAKE_API_BASE_URL` / `VISA_INTAKE_STORAGE_URL` when set.
    pub fn apply_env(mut self) -> Self {
        if let Some(url) = non_empty_var(ENV_API_BASE_URL) {
            self.api_base_url = url;
        }
        if let Some(url) = non_empty_var(ENV_STORAGE_BASE_URL) {
            self.storage_base_url = url;
        }
        self
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn page_size(&self) -> usize {
        self.dashboard_page_size.max(1)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("api_base_url", &self.api_base_url),
            ("storage_base_url", &self.storage_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(IntakeError::Config(format!(
                    "{} must be an http(s) URL, got `{}`",
                    name, url
                )));
            }
        }
        Ok(())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Loads and saves [`Config`] under the application data directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        let path = paths::config_file_in(&base);
        Self { base, path }
    }

    /// Reads the stored config (defaults when absent) and applies environment
    /// overrides.
    pub fn load(&self) -> Result<Config> {
        let config = persistence::load_json::<Config>(&self.path)?
            .unwrap_or_default()
            .apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        persistence::save_json(config, &self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn session_path(&self) -> PathBuf {
        paths::session_file_in(&self.base)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
