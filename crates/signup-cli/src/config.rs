use anyhow::{Context, Result};
use serde::Deserialize;
use signup_form::FormConfig;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "signup.toml";

/// The part of signup.toml the CLI reads; server sections are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub form: FormConfig,
}

impl CliConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// `SIGNUP_ENDPOINT` from the environment
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(endpoint) = var("SIGNUP_ENDPOINT") {
            self.form.endpoint = endpoint;
        }
        self
    }

    /// A `--endpoint` flag wins over file and environment
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.form.endpoint = endpoint;
        }
        self
    }
}

/// A missing `.env` is fine; anything else is worth telling the user
pub fn dotenv_warning<T>(result: dotenvy::Result<T>) -> Option<String> {
    match result {
        Err(e) if !e.not_found() => Some(format!("Failed to read .env: {}", e)),
        _ => None,
    }
}
