//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Deal;
use crate::router::Route;

/// The search criterion selected in the trip form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Minimize total discounted cost
    Cheapest,
    /// Minimize total duration
    Fastest,
}

/// Request to search for a trip.
#[derive(Debug, Deserialize)]
pub struct TripSearchRequest {
    /// Departure city name
    pub departure: String,

    /// Arrival city name
    pub arrival: String,

    /// Which criterion to optimize
    #[serde(rename = "type")]
    pub search_type: SearchType,
}

/// One leg of a found trip.
#[derive(Debug, Serialize)]
pub struct TripLegResult {
    /// Departure city
    pub departure: String,

    /// Arrival city
    pub arrival: String,

    /// Transport mode
    pub transport: String,

    /// Deal reference
    pub reference: String,

    /// Price after discount
    pub price: f64,

    /// Leg duration, e.g. "5h00m"
    pub duration: String,
}

impl TripLegResult {
    /// Create from a resolved deal.
    pub fn from_deal(deal: &Deal) -> Self {
        Self {
            departure: deal.departure().to_string(),
            arrival: deal.arrival().to_string(),
            transport: deal.transport().to_string(),
            reference: deal.reference().to_string(),
            price: deal.discounted_cost(),
            duration: deal.duration().to_string(),
        }
    }
}

/// Response for a trip search.
#[derive(Debug, Serialize)]
pub struct TripSearchResponse {
    /// Trip legs in travel order; empty when no route exists
    pub legs: Vec<TripLegResult>,

    /// Sum of discounted leg prices
    pub total_cost: f64,

    /// Total duration, e.g. "8h15m"
    pub total_duration: String,

    /// Display currency code
    pub currency: String,
}

impl TripSearchResponse {
    /// Create from a resolved route.
    pub fn from_route(route: &Route, currency: &str) -> Self {
        Self {
            legs: route.legs().iter().map(TripLegResult::from_deal).collect(),
            total_cost: route.total_cost(),
            total_duration: route.total_duration().to_string(),
            currency: currency.to_string(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
