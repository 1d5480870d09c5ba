use crate::domain::model::{BookingEnvelope, FlightQuery, SearchEnvelope};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Seam to the external flight-search provider. The aggregator owns no
/// provider lifecycle; the composing service constructs one and injects it.
#[async_trait]
pub trait FlightProvider: Send + Sync {
    /// Live flight search. The canonical budget in the query, when present,
    /// is forwarded as the provider's server-side price filter.
    async fn search_flights(&self, query: &FlightQuery) -> Result<SearchEnvelope>;

    /// Booking detail for one search result, addressed by its continuation
    /// token.
    async fn booking_options(&self, query: &FlightQuery, token: &str)
        -> Result<BookingEnvelope>;
}
