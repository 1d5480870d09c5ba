use crate::config::settings::ProviderSettings;
use crate::domain::model::{BookingEnvelope, FlightQuery, SearchEnvelope};
use crate::domain::ports::FlightProvider;
use crate::utils::error::{AggregatorError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// SerpAPI Google Flights client. Both provider operations go through the
/// same endpoint; the presence of a booking token selects the detail lookup.
pub struct SerpApiClient {
    client: Client,
    settings: ProviderSettings,
}

impl SerpApiClient {
    /// Fails fast on incomplete settings so a missing API key surfaces
    /// before any call is attempted.
    pub fn new(settings: ProviderSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            client: Client::new(),
            settings,
        })
    }

    /// Operational parameters shared by every call. `no_cache` stays on:
    /// prices and availability are volatile, and a stale cached response
    /// would feed wrong data into the budget decisions downstream.
    fn base_params(&self, query: &FlightQuery) -> Vec<(&'static str, String)> {
        vec![
            ("api_key", self.settings.api_key.clone()),
            ("engine", self.settings.engine.clone()),
            ("hl", self.settings.locale.clone()),
            ("gl", self.settings.country.clone()),
            ("currency", self.settings.currency.clone()),
            ("type", self.settings.flight_type.clone()),
            ("no_cache", "true".to_string()),
            ("departure_id", query.departure_code.clone()),
            ("arrival_id", query.arrival_code.clone()),
            ("outbound_date", query.departure_date.clone()),
        ]
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<T> {
        let mut request = self.client.get(&self.settings.base_url).query(params);
        if let Some(timeout) = self.settings.timeout_seconds {
            request = request.timeout(Duration::from_secs(timeout));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AggregatorError::ProviderError {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl FlightProvider for SerpApiClient {
    async fn search_flights(&self, query: &FlightQuery) -> Result<SearchEnvelope> {
        let mut params = self.base_params(query);
        if let Some(max_price) = &query.max_price {
            params.push(("max_price", max_price.clone()));
            tracing::debug!("Using server-side max_price filter: {}", max_price);
        }

        tracing::debug!(
            "Searching flights {} -> {} on {}",
            query.departure_code,
            query.arrival_code,
            query.departure_date
        );
        self.fetch(&params).await
    }

    async fn booking_options(
        &self,
        query: &FlightQuery,
        token: &str,
    ) -> Result<BookingEnvelope> {
        let mut params = self.base_params(query);
        params.push(("booking_token", token.to_string()));
        params.push(("show_hidden", "true".to_string()));
        params.push(("deep_search", "true".to_string()));

        tracing::debug!("Fetching booking options for token {}", token);
        self.fetch(&params).await
    }
}
