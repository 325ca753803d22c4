//! Route type and reference resolution.

use crate::domain::{Deal, DealRef, TripDuration};

/// Error from resolving search output back into deals.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// A reference produced by the search has no matching deal.
    ///
    /// This indicates a broken uniqueness invariant in the deal data; it is
    /// surfaced as a hard failure rather than leaving a hole in the route.
    #[error("deal reference {0} not found in deal list")]
    UnknownReference(DealRef),
}

/// A resolved route: the ordered deals making up one trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    legs: Vec<Deal>,
}

impl Route {
    /// An empty route, the result for unreachable or trivial queries.
    pub fn empty() -> Self {
        Self { legs: Vec::new() }
    }

    /// The legs in travel order.
    pub fn legs(&self) -> &[Deal] {
        &self.legs
    }

    /// Whether the route has no legs.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Total discounted cost across all legs.
    pub fn total_cost(&self) -> f64 {
        self.legs.iter().map(Deal::discounted_cost).sum()
    }

    /// Total duration across all legs.
    pub fn total_duration(&self) -> TripDuration {
        let minutes = self.legs.iter().map(|d| d.duration().total_minutes()).sum();
        TripDuration::from_total_minutes(minutes)
    }
}

/// Resolve an ordered reference sequence into a route, preserving order.
///
/// Each reference must match exactly one deal in `deals`; references are
/// unique by the dataset invariant, so the first match is the only match.
///
/// # Errors
///
/// Returns [`RouteError::UnknownReference`] when a reference has no match.
pub fn resolve_route(references: &[DealRef], deals: &[Deal]) -> Result<Route, RouteError> {
    let mut legs = Vec::with_capacity(references.len());

    for reference in references {
        let deal = deals
            .iter()
            .find(|d| d.reference() == reference)
            .ok_or_else(|| RouteError::UnknownReference(reference.clone()))?;
        legs.push(deal.clone());
    }

    Ok(Route { legs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{City, TransportMode};

    fn deal(from: &str, to: &str, cost: f64, discount: f64, h: u32, m: u32, reference: &str) -> Deal {
        Deal::new(
            City::parse(from).unwrap(),
            City::parse(to).unwrap(),
            TransportMode::parse("bus").unwrap(),
            cost,
            discount,
            TripDuration::new(h, m).unwrap(),
            DealRef::parse(reference).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn resolve_preserves_order_and_deals() {
        let deals = vec![
            deal("A", "B", 50.0, 0.0, 1, 0, "R1"),
            deal("B", "C", 20.0, 0.0, 0, 45, "R2"),
            deal("C", "D", 30.0, 0.0, 2, 0, "R3"),
        ];
        let refs = vec![
            DealRef::parse("R2").unwrap(),
            DealRef::parse("R1").unwrap(),
        ];

        let route = resolve_route(&refs, &deals).unwrap();
        assert_eq!(route.legs().len(), 2);
        assert_eq!(route.legs()[0], deals[1]);
        assert_eq!(route.legs()[1], deals[0]);

        // Round-trip: resolved deals carry the original references
        assert_eq!(route.legs()[0].reference().as_str(), "R2");
        assert_eq!(route.legs()[1].reference().as_str(), "R1");
    }

    #[test]
    fn unknown_reference_is_a_hard_failure() {
        let deals = vec![deal("A", "B", 50.0, 0.0, 1, 0, "R1")];
        let refs = vec![DealRef::parse("MISSING").unwrap()];

        let err = resolve_route(&refs, &deals).unwrap_err();
        assert_eq!(
            err,
            RouteError::UnknownReference(DealRef::parse("MISSING").unwrap())
        );
    }

    #[test]
    fn empty_references_resolve_to_empty_route() {
        let deals = vec![deal("A", "B", 50.0, 0.0, 1, 0, "R1")];
        let route = resolve_route(&[], &deals).unwrap();
        assert!(route.is_empty());
        assert_eq!(route.total_cost(), 0.0);
        assert_eq!(route.total_duration().total_minutes(), 0);
    }

    #[test]
    fn totals_sum_discounted_costs_and_minutes() {
        let deals = vec![
            deal("A", "B", 100.0, 20.0, 1, 30, "R1"),
            deal("B", "C", 50.0, 0.0, 0, 45, "R2"),
        ];
        let refs = vec![
            DealRef::parse("R1").unwrap(),
            DealRef::parse("R2").unwrap(),
        ];

        let route = resolve_route(&refs, &deals).unwrap();
        assert_eq!(route.total_cost(), 130.0);
        assert_eq!(route.total_duration(), TripDuration::new(2, 15).unwrap());
    }
}
