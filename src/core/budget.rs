use crate::domain::model::FlightOffer;
use serde_json::Value;

/// Collapses a free-form budget string ("Rs 19,000", "₹19000") into its
/// canonical digit-only form. Input with no digits at all ("no preference",
/// whitespace, empty) means no limit.
pub fn normalize_budget(raw: Option<&str>) -> Option<String> {
    let digits: String = raw?.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

/// Budget prefilter, applied before any metered booking-detail call.
///
/// Decision table, fail-open on missing data:
/// - no budget                    -> include
/// - budget not parseable         -> include
/// - no price amount on the offer -> include
/// - amount not parseable         -> include
/// - amount <= budget             -> include
/// - amount >  budget             -> exclude
///
/// The provider's server-side max_price filter has already narrowed the
/// results; this check only avoids detail calls, so an offer that cannot be
/// priced is never dropped here.
pub fn within_budget(offer: &FlightOffer, budget: Option<&str>) -> bool {
    let Some(budget) = budget else {
        return true;
    };
    let Ok(limit) = budget.parse::<i64>() else {
        return true;
    };
    let Some(amount) = offer.amount() else {
        tracing::debug!("No price found for offer, including anyway");
        return true;
    };
    match parse_amount(amount) {
        Some(price) => {
            let included = price <= limit;
            tracing::debug!(
                "Offer price {} {} budget {}",
                price,
                if included { "<=" } else { ">" },
                limit
            );
            included
        }
        None => {
            tracing::debug!("Could not parse price {}, including offer", amount);
            true
        }
    }
}

/// Integer price out of a heterogeneous amount value. Thousands separators
/// are tolerated; anything else fails the parse.
fn parse_amount(value: &Value) -> Option<i64> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => return None,
    };
    text.replace(',', "").trim().parse::<i64>().ok()
}
