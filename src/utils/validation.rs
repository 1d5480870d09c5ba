use crate::utils::error::{AggregatorError, Result};
use chrono::NaiveDate;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AggregatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AggregatorError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AggregatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AggregatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// IATA airport codes are three letters. Applied at the CLI boundary only;
/// the aggregation core forwards codes as-is.
pub fn validate_airport_code(field_name: &str, code: &str) -> Result<()> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AggregatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: "Expected a three-letter airport code (e.g. DEL)".to_string(),
        });
    }
    Ok(())
}

pub fn validate_date(field_name: &str, value: &str) -> Result<()> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|e| AggregatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected YYYY-MM-DD: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://serpapi.com/search").is_ok());
        assert!(validate_url("base_url", "http://localhost:8080").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "not-a-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_airport_code() {
        assert!(validate_airport_code("departure", "DEL").is_ok());
        assert!(validate_airport_code("departure", "bom").is_ok());
        assert!(validate_airport_code("departure", "DELHI").is_err());
        assert!(validate_airport_code("departure", "D1").is_err());
        assert!(validate_airport_code("departure", "").is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("date", "2025-10-01").is_ok());
        assert!(validate_date("date", "2025-13-01").is_err());
        assert!(validate_date("date", "tomorrow").is_err());
        assert!(validate_date("date", "01-10-2025").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("api_key", "key").is_ok());
        assert!(validate_non_empty_string("api_key", "   ").is_err());
    }
}
