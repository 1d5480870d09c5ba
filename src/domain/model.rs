use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One aggregation request. Fields pass through to the provider unvalidated;
/// the CLI layer applies its own input checks before building one of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub departure_code: String,
    pub arrival_code: String,
    pub departure_date: String,
    /// Free-form budget text ("Rs 19,000", "no preference") or already
    /// canonical digits. `None` means no limit.
    pub budget: Option<String>,
}

/// Provider-facing query block shared by both provider operations.
/// `max_price` carries the canonical budget and is only sent on search.
#[derive(Debug, Clone)]
pub struct FlightQuery {
    pub departure_code: String,
    pub arrival_code: String,
    pub departure_date: String,
    pub max_price: Option<String>,
}

/// A raw flight offer from the search operation. The provider's shape varies
/// between responses, so every field is optional and anything unrecognized is
/// kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOffer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_amount: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_token: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl FlightOffer {
    /// Price amount lookup: a nested `price.amount` wins over the flat
    /// `price_amount` field. Null values count as absent.
    pub fn amount(&self) -> Option<&Value> {
        if let Some(Value::Object(price)) = &self.price {
            if let Some(amount) = price.get("amount").filter(|v| !v.is_null()) {
                return Some(amount);
            }
        }
        self.price_amount.as_ref().filter(|v| !v.is_null())
    }
}

/// Search operation response: two result partitions, either of which the
/// provider may omit entirely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default, rename = "best_flights")]
    pub recommended: Vec<FlightOffer>,
    #[serde(default, rename = "other_flights")]
    pub other: Vec<FlightOffer>,
}

impl SearchEnvelope {
    /// Both partitions in provider order, recommended first.
    pub fn into_offers(self) -> Vec<FlightOffer> {
        let mut offers = self.recommended;
        offers.extend(self.other);
        offers
    }
}

/// Detail operation response for one booking token.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingEnvelope {
    #[serde(default)]
    pub selected_flights: Vec<SelectedFlight>,
    #[serde(default)]
    pub booking_options: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectedFlight {
    #[serde(default)]
    pub flights: Vec<Value>,
}

impl BookingEnvelope {
    /// A wholly-empty envelope is treated as "nothing usable" by the
    /// enrichment stage.
    pub fn is_empty(&self) -> bool {
        self.selected_flights.is_empty() && self.booking_options.is_empty()
    }
}

/// One enriched candidate: the segment list from the first selected flight
/// plus the full booking-options list, either possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedFlight {
    pub flight_segments: Vec<Value>,
    pub booking_options: Vec<Value>,
}

/// Aggregation result with call-volume counters for observability.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateOutcome {
    pub flights: Vec<EnrichedFlight>,
    pub search_calls: u32,
    pub booking_calls: u32,
}
