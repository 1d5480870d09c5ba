use crate::utils::error::Result;
use crate::utils::validation::{validate_airport_code, validate_date, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "flight-aggregator")]
#[command(about = "Searches flights and aggregates booking options within a budget")]
pub struct CliArgs {
    /// Departure airport code, e.g. DEL
    #[arg(long)]
    pub departure: String,

    /// Arrival airport code, e.g. BOM
    #[arg(long)]
    pub arrival: String,

    /// Departure date, YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    /// Maximum price; free-form ("Rs 19,000") or "no preference"
    #[arg(long)]
    pub budget: Option<String>,

    /// Provider settings TOML; falls back to environment variables
    #[arg(long)]
    pub settings: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliArgs {
    fn validate(&self) -> Result<()> {
        validate_airport_code("departure", &self.departure)?;
        validate_airport_code("arrival", &self.arrival)?;
        validate_date("date", &self.date)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(departure: &str, arrival: &str, date: &str) -> CliArgs {
        CliArgs {
            departure: departure.to_string(),
            arrival: arrival.to_string(),
            date: date.to_string(),
            budget: None,
            settings: None,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_args_pass() {
        assert!(args("DEL", "BOM", "2025-10-01").validate().is_ok());
    }

    #[test]
    fn test_bad_airport_code_rejected() {
        assert!(args("DELHI", "BOM", "2025-10-01").validate().is_err());
    }

    #[test]
    fn test_bad_date_rejected() {
        assert!(args("DEL", "BOM", "01/10/2025").validate().is_err());
    }
}
