use crate::core::budget::{normalize_budget, within_budget};
use crate::domain::model::{
    AggregateOutcome, EnrichedFlight, FlightOffer, FlightQuery, SearchRequest,
};
use crate::domain::ports::FlightProvider;
use crate::utils::error::Result;

/// Three-stage flight aggregation: one live search, a local budget prefilter,
/// then booking-detail calls for the survivors only. The prefilter exists
/// purely to keep the volume of metered detail calls down.
pub struct FlightAggregator<P: FlightProvider> {
    provider: P,
}

impl<P: FlightProvider> FlightAggregator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn aggregate(&self, request: &SearchRequest) -> Result<AggregateOutcome> {
        let budget = normalize_budget(request.budget.as_deref());
        match &budget {
            Some(limit) => tracing::info!("Price limit set to {}", limit),
            None => tracing::info!("No price limit, all offers eligible"),
        }

        let query = FlightQuery {
            departure_code: request.departure_code.clone(),
            arrival_code: request.arrival_code.clone(),
            departure_date: request.departure_date.clone(),
            max_price: budget.clone(),
        };

        // Stage 1: a single search call, with the budget pushed down so the
        // provider narrows results at the source.
        let offers = self.provider.search_flights(&query).await?.into_offers();
        tracing::debug!("Search returned {} offers", offers.len());

        // Stage 2: local prefilter before anything metered happens.
        let shortlisted: Vec<FlightOffer> = offers
            .into_iter()
            .filter(|offer| within_budget(offer, budget.as_deref()))
            .collect();
        tracing::debug!("{} offers within budget", shortlisted.len());

        // Stage 3: detail calls, sequentially, for token-bearing survivors.
        // Offers without a continuation token cannot be enriched and drop out.
        let mut flights = Vec::new();
        let mut booking_calls = 0;
        for offer in &shortlisted {
            let Some(token) = offer.booking_token.as_deref() else {
                continue;
            };
            booking_calls += 1;
            if let Some(enriched) = self.enrich(&query, token).await {
                flights.push(enriched);
            }
        }

        tracing::info!(
            "Made {} booking calls for {} shortlisted offers",
            booking_calls,
            shortlisted.len()
        );

        Ok(AggregateOutcome {
            flights,
            search_calls: 1,
            booking_calls,
        })
    }

    /// One detail call. A transport failure or an empty envelope skips this
    /// candidate instead of aborting the batch.
    async fn enrich(&self, query: &FlightQuery, token: &str) -> Option<EnrichedFlight> {
        let envelope = match self.provider.booking_options(query, token).await {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!("Booking options fetch failed for token {}: {}", token, e);
                return None;
            }
        };

        if envelope.is_empty() {
            tracing::warn!("Empty booking response for token {}, skipping", token);
            return None;
        }

        let flight_segments = envelope
            .selected_flights
            .first()
            .map(|selected| selected.flights.clone())
            .unwrap_or_default();

        Some(EnrichedFlight {
            flight_segments,
            booking_options: envelope.booking_options,
        })
    }
}
