//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Deal;
use crate::router::Route;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the trip search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub departure_cities: Vec<String>,
    pub arrival_cities: Vec<String>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Trip search results fragment.
#[derive(Template)]
#[template(path = "trip_results.html")]
pub struct TripResultsTemplate {
    pub legs: Vec<TripLegView>,
    pub total_cost: String,
    pub total_duration: String,
    pub currency: String,
}

impl TripResultsTemplate {
    /// Create from a resolved route.
    pub fn from_route(route: &Route, currency: &str) -> Self {
        Self {
            legs: route.legs().iter().map(TripLegView::from_deal).collect(),
            total_cost: format!("{:.2}", route.total_cost()),
            total_duration: route.total_duration().to_string(),
            currency: currency.to_string(),
        }
    }
}

/// Error fragment shown to form clients in place of the results.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One trip leg for display.
#[derive(Debug, Clone)]
pub struct TripLegView {
    pub departure: String,
    pub arrival: String,
    pub transport: String,
    pub reference: String,
    pub price: String,
    pub duration: String,
}

impl TripLegView {
    /// Create from a resolved deal.
    pub fn from_deal(deal: &Deal) -> Self {
        Self {
            departure: deal.departure().to_string(),
            arrival: deal.arrival().to_string(),
            transport: deal.transport().to_string(),
            reference: deal.reference().to_string(),
            price: format!("{:.2}", deal.discounted_cost()),
            duration: deal.duration().to_string(),
        }
    }
}
