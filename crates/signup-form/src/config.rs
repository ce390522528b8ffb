// File: src/config.rs
// Purpose: `[form]` section of signup.toml

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client-side settings of the registration flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Sink URL the submission is posted to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Where to navigate after a successful submission
    #[serde(default = "default_redirect_to")]
    pub redirect_to: String,

    /// Grace period before the redirect, in seconds
    #[serde(default = "default_redirect_delay_secs")]
    pub redirect_delay_secs: u64,

    /// Upper bound on one submission request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:3000/partners".to_string()
}

fn default_redirect_to() -> String {
    "/list".to_string()
}

fn default_redirect_delay_secs() -> u64 {
    3
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            redirect_to: default_redirect_to(),
            redirect_delay_secs: default_redirect_delay_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl FormConfig {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_secs(self.redirect_delay_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_config() {
        let config = FormConfig::default();
        assert_eq!(config.redirect_to, "/list");
        assert_eq!(config.redirect_delay(), Duration::from_secs(3));
        assert_eq!(config.endpoint, "http://127.0.0.1:3000/partners");
    }

    #[test]
    fn test_partial_form_config() {
        let config: FormConfig = toml::from_str("redirect_delay_secs = 0").unwrap();
        assert_eq!(config.redirect_delay(), Duration::ZERO);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }
}
