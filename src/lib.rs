pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::serpapi::SerpApiClient;
pub use config::settings::ProviderSettings;
pub use core::aggregator::FlightAggregator;
pub use core::budget::{normalize_budget, within_budget};
pub use domain::model::{AggregateOutcome, EnrichedFlight, FlightOffer, SearchRequest};
pub use domain::ports::FlightProvider;
pub use utils::error::{AggregatorError, Result};
