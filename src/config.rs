use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::errors::{ConfigError, Result};
use crate::provider::Provider;
use crate::source::{non_empty_var, ConfigSource, ProcessEnv};

/// Variable selecting the provider.
pub const PROVIDER_VAR: &str = "LLM_PROVIDER";

/// Resolved LLM configuration.
///
/// Only produced by [`load_config`], so `api_key` and `model` are always
/// non-empty. `Debug` and `Serialize` mask the key.
#[derive(Clone, PartialEq, Eq)]
pub struct LlmConfig {
    provider: Provider,
    model: String,
    api_key: String,
}

impl LlmConfig {
    #[must_use]
    pub fn provider(&self) -> Provider {
        self.provider
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The API key with all but its first characters hidden.
    #[must_use]
    pub fn masked_api_key(&self) -> String {
        mask_secret(&self.api_key)
    }
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &self.masked_api_key())
            .finish()
    }
}

#[derive(Serialize)]
struct Redacted<'a> {
    provider: Provider,
    model: &'a str,
    api_key: String,
}

impl Serialize for LlmConfig {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Redacted {
            provider: self.provider,
            model: &self.model,
            api_key: self.masked_api_key(),
        }
        .serialize(serializer)
    }
}

/// Resolve provider, model and API key from `source`.
///
/// Steps, each short-circuiting on failure:
/// 1. `LLM_PROVIDER` must be set and non-empty.
/// 2. It must name a supported provider exactly.
/// 3. The provider's API-key variable must be set and non-empty.
/// 4. The provider's model variable overrides the default model when non-empty.
///
/// A variable that is set but not valid UTF-8 fails with
/// [`ConfigError::NotUnicode`] instead of being treated as unset.
pub fn load_config(source: &impl ConfigSource) -> Result<LlmConfig> {
    let raw = read_var(source, PROVIDER_VAR)?.ok_or(ConfigError::MissingProvider)?;
    let provider: Provider = raw.parse()?;
    let spec = provider.spec();

    let api_key = read_var(source, spec.api_key_var)?.ok_or(ConfigError::MissingApiKey {
        provider,
        var: spec.api_key_var,
    })?;

    let model = match read_var(source, spec.model_var)? {
        Some(m) => {
            debug!(var = spec.model_var, "model overridden");
            m
        }
        None => spec.default_model.to_string(),
    };

    info!(provider = %provider, model = %model, "Using LLM provider");

    Ok(LlmConfig {
        provider,
        model,
        api_key,
    })
}

fn read_var(source: &impl ConfigSource, key: &'static str) -> Result<Option<String>> {
    match non_empty_var(source, key) {
        Some(v) => Ok(Some(v)),
        None if source.var(key).is_none() && source.is_set(key) => {
            Err(ConfigError::NotUnicode { var: key })
        }
        None => Ok(None),
    }
}

/// [`load_config`] against the current process environment.
pub fn load_config_from_env() -> Result<LlmConfig> {
    load_config(&ProcessEnv)
}

/// Hide a secret for display: the first four characters followed by
/// `****`, or just `****` when the secret is eight characters or fewer.
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return "****".to_string();
    }
    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}****")
}
