//! Deal type.

use super::{City, DealRef, DomainError, TransportMode, TripDuration};

/// A directed transport offer between two cities.
///
/// A deal is one edge in the trip graph: it carries the cost (with a
/// percentage discount), the trip duration, the transport mode, and a
/// reference that identifies the deal across the whole data set.
///
/// Numeric fields are validated at construction, so the routing engine can
/// derive edge weights from any `Deal` without re-checking.
#[derive(Debug, Clone, PartialEq)]
pub struct Deal {
    departure: City,
    arrival: City,
    transport: TransportMode,
    cost: f64,
    discount: f64,
    duration: TripDuration,
    reference: DealRef,
}

impl Deal {
    /// Construct a deal, validating cost and discount.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the cost is negative or not finite, or if the
    /// discount falls outside the range [0, 100].
    pub fn new(
        departure: City,
        arrival: City,
        transport: TransportMode,
        cost: f64,
        discount: f64,
        duration: TripDuration,
        reference: DealRef,
    ) -> Result<Self, DomainError> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(DomainError::InvalidCost(cost));
        }
        if !discount.is_finite() || !(0.0..=100.0).contains(&discount) {
            return Err(DomainError::InvalidDiscount(discount));
        }
        Ok(Self {
            departure,
            arrival,
            transport,
            cost,
            discount,
            duration,
            reference,
        })
    }

    /// The departure city.
    pub fn departure(&self) -> &City {
        &self.departure
    }

    /// The arrival city.
    pub fn arrival(&self) -> &City {
        &self.arrival
    }

    /// The transport mode.
    pub fn transport(&self) -> &TransportMode {
        &self.transport
    }

    /// The undiscounted cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The discount percentage, in [0, 100].
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// The trip duration.
    pub fn duration(&self) -> TripDuration {
        self.duration
    }

    /// The unique deal reference.
    pub fn reference(&self) -> &DealRef {
        &self.reference
    }

    /// The cost after applying the discount percentage.
    pub fn discounted_cost(&self) -> f64 {
        self.cost - (self.cost * self.discount / 100.0)
    }

    /// The cost weight used by the cheapest-trip search, in integer
    /// hundredths of the currency unit.
    ///
    /// Distances are summed and compared as integers inside the search,
    /// so the discounted cost is converted to fixed-point here once.
    pub fn cost_weight(&self) -> u64 {
        (self.discounted_cost() * 100.0).round() as u64
    }

    /// The duration weight used by the quickest-trip search, in minutes.
    pub fn duration_weight(&self) -> u64 {
        self.duration.total_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(cost: f64, discount: f64) -> Result<Deal, DomainError> {
        Deal::new(
            City::parse("London").unwrap(),
            City::parse("Amsterdam").unwrap(),
            TransportMode::parse("bus").unwrap(),
            cost,
            discount,
            TripDuration::new(1, 30).unwrap(),
            DealRef::parse("BLA0130").unwrap(),
        )
    }

    #[test]
    fn reject_negative_cost() {
        assert!(matches!(deal(-1.0, 0.0), Err(DomainError::InvalidCost(_))));
    }

    #[test]
    fn reject_non_finite_cost() {
        assert!(deal(f64::NAN, 0.0).is_err());
        assert!(deal(f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn reject_discount_out_of_range() {
        assert!(matches!(
            deal(100.0, -5.0),
            Err(DomainError::InvalidDiscount(_))
        ));
        assert!(matches!(
            deal(100.0, 100.5),
            Err(DomainError::InvalidDiscount(_))
        ));
    }

    #[test]
    fn boundary_discounts_accepted() {
        assert_eq!(deal(100.0, 0.0).unwrap().discounted_cost(), 100.0);
        assert_eq!(deal(100.0, 100.0).unwrap().discounted_cost(), 0.0);
    }

    #[test]
    fn discount_applied_to_cost_weight() {
        // cost 100 with 20% discount weighs 80, never 100 or 20
        let d = deal(100.0, 20.0).unwrap();
        assert_eq!(d.discounted_cost(), 80.0);
        assert_eq!(d.cost_weight(), 8000);
    }

    #[test]
    fn duration_weight_is_minutes() {
        let d = deal(50.0, 0.0).unwrap();
        assert_eq!(d.duration_weight(), 90);
    }

    #[test]
    fn fractional_costs_round_to_hundredths() {
        // 19.99 at 10% off = 17.991, stored as 1799 hundredths
        let d = deal(19.99, 10.0).unwrap();
        assert_eq!(d.cost_weight(), 1799);
    }
}
