use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Supported LLM vendors.
///
/// The canonical names (`OPEN_AI`, `ANTHROPIC`, `GEMINI`) are what
/// `LLM_PROVIDER` must contain, matched exactly and case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "OPEN_AI")]
    OpenAi,
    #[serde(rename = "ANTHROPIC")]
    Anthropic,
    #[serde(rename = "GEMINI")]
    Gemini,
}

/// Per-provider environment lookup record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderSpec {
    /// Variable holding the API key (required).
    pub api_key_var: &'static str,
    /// Model used when `model_var` is unset or empty.
    pub default_model: &'static str,
    /// Variable overriding the model (optional).
    pub model_var: &'static str,
}

const OPEN_AI: ProviderSpec = ProviderSpec {
    api_key_var: "OPENAI_API_KEY",
    default_model: "gpt-4o",
    model_var: "OPENAI_MODEL",
};

const ANTHROPIC: ProviderSpec = ProviderSpec {
    api_key_var: "ANTHROPIC_API_KEY",
    default_model: "claude-3-opus-20240307",
    model_var: "ANTHROPIC_MODEL",
};

const GEMINI: ProviderSpec = ProviderSpec {
    api_key_var: "GEMINI_API_KEY",
    default_model: "gemini-1.5-pro",
    model_var: "GEMINI_MODEL",
};

impl Provider {
    /// All providers, in declaration order.
    pub const ALL: [Provider; 3] = [Provider::OpenAi, Provider::Anthropic, Provider::Gemini];

    /// Canonical name as accepted in `LLM_PROVIDER`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::OpenAi => "OPEN_AI",
            Provider::Anthropic => "ANTHROPIC",
            Provider::Gemini => "GEMINI",
        }
    }

    /// Environment lookup record for this provider.
    #[must_use]
    pub fn spec(self) -> &'static ProviderSpec {
        match self {
            Provider::OpenAi => &OPEN_AI,
            Provider::Anthropic => &ANTHROPIC,
            Provider::Gemini => &GEMINI,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ConfigError::UnsupportedProvider {
                value: s.to_string(),
            })
    }
}

/// Comma-separated list of canonical provider names.
#[must_use]
pub fn supported_names() -> String {
    Provider::ALL
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_names() {
        assert_eq!("OPEN_AI".parse::<Provider>().unwrap(), Provider::OpenAi);
        assert_eq!("ANTHROPIC".parse::<Provider>().unwrap(), Provider::Anthropic);
        assert_eq!("GEMINI".parse::<Provider>().unwrap(), Provider::Gemini);
    }

    #[test]
    fn parse_is_case_sensitive() {
        let err = "openai".parse::<Provider>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnsupportedProvider {
                value: "openai".to_string()
            }
        );
        assert!("Gemini".parse::<Provider>().is_err());
        assert!("OPENAI".parse::<Provider>().is_err());
    }

    #[test]
    fn display_matches_canonical_name() {
        for p in Provider::ALL {
            assert_eq!(p.to_string(), p.as_str());
            assert_eq!(p.as_str().parse::<Provider>().unwrap(), p);
        }
    }

    #[test]
    fn spec_table() {
        let s = Provider::OpenAi.spec();
        assert_eq!(s.api_key_var, "OPENAI_API_KEY");
        assert_eq!(s.model_var, "OPENAI_MODEL");
        assert_eq!(s.default_model, "gpt-4o");

        let s = Provider::Anthropic.spec();
        assert_eq!(s.api_key_var, "ANTHROPIC_API_KEY");
        assert_eq!(s.model_var, "ANTHROPIC_MODEL");
        assert_eq!(s.default_model, "claude-3-opus-20240307");

        let s = Provider::Gemini.spec();
        assert_eq!(s.api_key_var, "GEMINI_API_KEY");
        assert_eq!(s.model_var, "GEMINI_MODEL");
        assert_eq!(s.default_model, "gemini-1.5-pro");
    }

    #[test]
    fn supported_names_in_order() {
        assert_eq!(supported_names(), "OPEN_AI, ANTHROPIC, GEMINI");
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&Provider::OpenAi).unwrap();
        assert_eq!(json, "\"OPEN_AI\"");
        let p: Provider = serde_json::from_str("\"GEMINI\"").unwrap();
        assert_eq!(p, Provider::Gemini);
    }
}
