use crate::use_cases::LandingCopy;
use serde::Deserialize;
use std::{env, fmt, io, path::Path, time::Duration};

// Runtime/server settings. The TOML file is optional; environment wins.

pub const DEFAULT_CONFIG_PATH: &str = "landing.toml";

pub fn http_port() -> u16 {
    env::var("LANDING_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}

pub fn config_path() -> String {
    env::var("LANDING_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    // Base address of the stats API, including its version prefix.
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    // Marketing copy lives at the top level of the file.
    #[serde(flatten)]
    pub copy: LandingCopy,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000/api/v1".to_string(),
            request_timeout_ms: 1500,
            copy: LandingCopy::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: String, source: io::Error },
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => write!(f, "failed to read {path}: {source}"),
            ConfigError::Parse(err) => write!(f, "invalid landing config: {err}"),
            ConfigError::Invalid(reason) => write!(f, "invalid landing config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl LandingConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    // A missing file falls back to the defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_toml_str(&raw),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no landing config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    // Load the file named by LANDING_CONFIG, then apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_file(config_path())?.with_overrides(|key| env::var(key).ok())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("STATS_API_URL") {
            self.api_base_url = url;
        }
        if let Some(raw) = lookup("STATS_API_TIMEOUT_MS") {
            self.request_timeout_ms = raw.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("STATS_API_TIMEOUT_MS is not a number: {raw}"))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = url::Url::parse(&self.api_base_url).map_err(|err| {
            ConfigError::Invalid(format!("api_base_url {:?}: {err}", self.api_base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must use http or https, got {}",
                url.scheme()
            )));
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }
        if let Some(category) = self.copy.categories.iter().find(|c| c.key.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "category {:?} has an empty key",
                category.label
            )));
        }
        Ok(())
    }
}
