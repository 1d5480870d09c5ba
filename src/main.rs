use anyhow::Context;
use clap::Parser;
use flight_aggregator::domain::model::SearchRequest;
use flight_aggregator::utils::{logger, validation::Validate};
use flight_aggregator::{CliArgs, FlightAggregator, ProviderSettings, SerpApiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting flight-aggregator CLI");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    if let Err(e) = args.validate() {
        tracing::error!("Argument validation failed: {}", e);
        eprintln!("Invalid arguments: {}", e);
        std::process::exit(2);
    }

    let settings = match &args.settings {
        Some(path) => ProviderSettings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => ProviderSettings::from_env()
            .context("provider settings not configured (set SERPAPI_API_KEY or pass --settings)")?,
    };

    let provider = SerpApiClient::new(settings).context("invalid provider settings")?;
    let aggregator = FlightAggregator::new(provider);

    let request = SearchRequest {
        departure_code: args.departure.clone(),
        arrival_code: args.arrival.clone(),
        departure_date: args.date.clone(),
        budget: args.budget.clone(),
    };

    match aggregator.aggregate(&request).await {
        Ok(outcome) => {
            tracing::info!(
                "Done: {} flights, {} search call(s), {} booking call(s)",
                outcome.flights.len(),
                outcome.search_calls,
                outcome.booking_calls
            );
            if outcome.flights.is_empty() {
                println!("No flights matched the search.");
            } else {
                println!("{}", serde_json::to_string_pretty(&outcome.flights)?);
            }
            Ok(())
        }
        Err(e) => {
            // An aggregate-level failure is "search unavailable", which is
            // different from an empty result.
            tracing::error!("Flight search failed: {}", e);
            eprintln!("Flight search unavailable: {}", e);
            std::process::exit(1);
        }
    }
}
