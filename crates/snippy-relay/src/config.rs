//! Relay configuration
//!
//! Read from the process environment, after loading a `.env` file if one
//! is present.

use snippy_core_types::Sensitive;

use crate::error::{RelayError, Result};

pub const ENV_API_KEY: &str = "GROQ_API_KEY";
pub const ENV_MODEL: &str = "SNIPPY_MODEL";
pub const ENV_PROVIDER_URL: &str = "SNIPPY_PROVIDER_URL";
pub const ENV_BIND: &str = "SNIPPY_BIND";

pub const DEFAULT_MODEL: &str = "llama3-groq-8b-8192-tool-use-preview";
pub const DEFAULT_PROVIDER_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_key: Option<Sensitive<String>>,
    pub model: String,
    pub provider_url: String,
    pub bind: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl RelayConfig {
    /// Load from `.env` (if present) and the process environment
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            api_key: get(ENV_API_KEY).map(Sensitive::new),
            model: get(ENV_MODEL).unwrap_or(defaults.model),
            provider_url: get(ENV_PROVIDER_URL).unwrap_or(defaults.provider_url),
            bind: get(ENV_BIND).unwrap_or(defaults.bind),
        }
    }

    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }

    /// API key, or a configuration error naming the variable to set
    ///
    /// # Errors
    ///
    /// `RelayError::Configuration` when no key is configured.
    pub fn require_api_key(&self) -> Result<&Sensitive<String>> {
        self.api_key
            .as_ref()
            .ok_or_else(|| RelayError::Configuration(format!("{} is not set", ENV_API_KEY)))
    }
}
