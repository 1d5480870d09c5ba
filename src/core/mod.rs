pub mod aggregator;
pub mod budget;

pub use crate::domain::model::{
    AggregateOutcome, EnrichedFlight, FlightOffer, FlightQuery, SearchRequest,
};
pub use crate::domain::ports::FlightProvider;
pub use crate::utils::error::Result;
