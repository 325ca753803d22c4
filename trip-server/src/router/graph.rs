//! Deal graph construction.
//!
//! The graph is an adjacency structure over cities, with one directed edge
//! per deal. City names are interned to dense integer ids at build time so
//! the search can use plain vectors for its distance and predecessor
//! tables instead of hashed lookups.

use std::collections::HashMap;

use crate::domain::{City, Deal, DealRef, TransportMode};

/// Dense city index assigned at graph build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CityId(u32);

impl CityId {
    /// The id as a vector index.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// The optimization axis for a route search.
///
/// Selects which scalar of a [`DealEdge`] is summed and compared: the
/// discounted cost or the duration in minutes. The two criteria share one
/// search algorithm and may legitimately produce different routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// Minimize total discounted cost.
    Cheapest,
    /// Minimize total duration.
    Fastest,
}

/// One weighted edge in the deal graph.
///
/// Both weights are carried so a single built graph can serve searches
/// under either criterion.
#[derive(Debug, Clone)]
pub struct DealEdge {
    /// Arrival city.
    pub to: CityId,
    /// Transport mode; parallel edges between the same cities differ here.
    pub transport: TransportMode,
    /// Discounted cost in integer hundredths.
    pub cost: u64,
    /// Duration in minutes.
    pub minutes: u64,
    /// The owning deal's reference.
    pub reference: DealRef,
}

impl DealEdge {
    /// The edge weight under a criterion.
    pub fn weight(&self, criterion: Criterion) -> u64 {
        match criterion {
            Criterion::Cheapest => self.cost,
            Criterion::Fastest => self.minutes,
        }
    }
}

/// An adjacency structure over the cities of a deal list.
///
/// Every city appearing anywhere in the input, as a departure or as an
/// arrival, is a vertex; a pure destination simply has no outgoing edges.
/// The graph is read-only once built and can be shared across concurrent
/// searches.
#[derive(Debug, Clone, Default)]
pub struct DealGraph {
    cities: Vec<City>,
    ids: HashMap<City, CityId>,
    adjacency: Vec<Vec<DealEdge>>,
}

impl DealGraph {
    /// Build a graph from a deal list. An empty list yields an empty graph.
    ///
    /// A later deal with the same (departure, arrival, transport) triple as
    /// an earlier one replaces its edge; this only affects literal
    /// duplicate entries and is the defined behavior, matching the
    /// reference-data assumption that such triples are unique.
    pub fn build(deals: &[Deal]) -> Self {
        let mut graph = Self::default();

        for deal in deals {
            let from = graph.intern(deal.departure());
            let to = graph.intern(deal.arrival());

            let edge = DealEdge {
                to,
                transport: deal.transport().clone(),
                cost: deal.cost_weight(),
                minutes: deal.duration_weight(),
                reference: deal.reference().clone(),
            };

            let edges = &mut graph.adjacency[from.index()];
            match edges
                .iter_mut()
                .find(|e| e.to == to && e.transport == edge.transport)
            {
                Some(existing) => *existing = edge,
                None => edges.push(edge),
            }
        }

        graph
    }

    fn intern(&mut self, city: &City) -> CityId {
        if let Some(id) = self.ids.get(city) {
            return *id;
        }
        let id = CityId(self.cities.len() as u32);
        self.cities.push(city.clone());
        self.ids.insert(city.clone(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Look up a city's id. Absence means the city never appeared in the
    /// deal list; the search treats it as unreachable, not as an error.
    pub fn city_id(&self, city: &City) -> Option<CityId> {
        self.ids.get(city).copied()
    }

    /// The city behind an id.
    pub fn city(&self, id: CityId) -> &City {
        &self.cities[id.index()]
    }

    /// Number of cities (vertices) in the graph.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Outgoing edges from a city. Empty for pure destinations.
    pub fn edges_from(&self, id: CityId) -> &[DealEdge] {
        &self.adjacency[id.index()]
    }

    /// The weight of every parallel edge between two cities under a
    /// criterion, keyed by transport mode. Empty when no edge exists;
    /// "no edge" is "no neighbor", never a failure.
    pub fn edge_weights(&self, from: CityId, to: CityId, criterion: Criterion) -> Vec<(&TransportMode, u64)> {
        self.adjacency[from.index()]
            .iter()
            .filter(|e| e.to == to)
            .map(|e| (&e.transport, e.weight(criterion)))
            .collect()
    }
}
