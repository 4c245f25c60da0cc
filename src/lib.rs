pub mod config;
pub mod env_file;
pub mod errors;
pub mod provider;
pub mod source;

// Re-export key types at crate root for convenience.
pub use config::{load_config, load_config_from_env, mask_secret, LlmConfig, PROVIDER_VAR};
pub use env_file::{find_dotenv, load_dotenv, load_env_file};
pub use errors::{ConfigError, Result};
pub use provider::{supported_names, Provider, ProviderSpec};
pub use source::{non_empty_var, ConfigSource, ProcessEnv, StaticSource};
