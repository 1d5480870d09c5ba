use crate::utils::error::{AggregatorError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Operational parameters for the flight-search provider. Never sourced from
/// user input; loaded from a TOML file or assembled from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub api_key: String,
    #[serde(default = "default_engine")]
    pub engine: String,
    /// Interface language, the provider's `hl` parameter.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Search country, the provider's `gl` parameter.
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Provider trip-type code; "2" is one-way.
    #[serde(default = "default_flight_type")]
    pub flight_type: String,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_base_url() -> String {
    "https://serpapi.com/search".to_string()
}

fn default_engine() -> String {
    "google_flights".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_country() -> String {
    "in".to_string()
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_flight_type() -> String {
    "2".to_string()
}

impl ProviderSettings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AggregatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| AggregatorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values. Unknown
    /// variables are left as-is so validation can point at them later.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// Settings from the environment variables the service has historically
    /// used. Only the API key is mandatory.
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("SERPAPI_API_KEY").map_err(|_| AggregatorError::MissingConfigError {
                field: "SERPAPI_API_KEY".to_string(),
            })?;

        Ok(Self {
            base_url: std::env::var("SERPAPI_BASE_URL").unwrap_or_else(|_| default_base_url()),
            api_key,
            engine: std::env::var("SEARCH_ENGINE").unwrap_or_else(|_| default_engine()),
            locale: std::env::var("LANGUAGE").unwrap_or_else(|_| default_locale()),
            country: std::env::var("COUNTRY").unwrap_or_else(|_| default_country()),
            currency: std::env::var("CURRENCY").unwrap_or_else(|_| default_currency()),
            flight_type: std::env::var("FLIGHT_TYPE").unwrap_or_else(|_| default_flight_type()),
            timeout_seconds: None,
        })
    }
}

impl Validate for ProviderSettings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_non_empty_string("engine", &self.engine)?;
        validate_non_empty_string("currency", &self.currency)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_toml_applies_defaults() {
        let settings = ProviderSettings::from_toml_str(r#"api_key = "k""#).unwrap();
        assert_eq!(settings.base_url, "https://serpapi.com/search");
        assert_eq!(settings.engine, "google_flights");
        assert_eq!(settings.currency, "INR");
        assert_eq!(settings.flight_type, "2");
        assert_eq!(settings.timeout_seconds, None);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(ProviderSettings::from_toml_str("api_key = ").is_err());
        assert!(ProviderSettings::from_toml_str("engine = \"g\"").is_err());
    }

    #[test]
    fn test_unknown_env_placeholder_left_untouched() {
        let settings =
            ProviderSettings::from_toml_str(r#"api_key = "${FA_DOES_NOT_EXIST_12345}""#).unwrap();
        assert_eq!(settings.api_key, "${FA_DOES_NOT_EXIST_12345}");
    }

    #[test]
    fn test_validate_catches_bad_base_url() {
        let mut settings = ProviderSettings::from_toml_str(r#"api_key = "k""#).unwrap();
        settings.base_url = "not-a-url".to_string();
        assert!(settings.validate().is_err());
    }
}
