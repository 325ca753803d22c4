//! Shortest-route search over the deal graph.
//!
//! A label-setting (Dijkstra) search adapted for parallel edges: between
//! the same two cities several deals may compete, one per transport mode,
//! and the relaxation step considers each of them under the active
//! criterion. The frontier is a binary min-heap with lazy deletion, and
//! the search exits as soon as the target is settled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::domain::{City, Deal, DealRef};

use super::graph::{CityId, Criterion, DealGraph};
use super::route::{Route, RouteError, resolve_route};

/// Distance used before a city has been reached.
const UNREACHED: u64 = u64::MAX;

/// Heap entry ordered as a min-heap on distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    distance: u64,
    city: CityId,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed, because BinaryHeap is a max-heap
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.city.index().cmp(&self.city.index()))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the minimum-total-weight route between two cities.
///
/// Returns the ordered deal references forming the route. The result is
/// empty when the source equals the target, when either city is unknown to
/// the graph, or when no path connects them; none of these are errors.
///
/// Among candidates with equal distance the first one evaluated wins
/// (strict-improvement relaxation), which makes the search deterministic
/// for a given graph.
pub fn find_route(
    graph: &DealGraph,
    source: &City,
    target: &City,
    criterion: Criterion,
) -> Vec<DealRef> {
    let (Some(source_id), Some(target_id)) = (graph.city_id(source), graph.city_id(target)) else {
        // A city absent from the deal data behaves like an unreachable one
        debug!(%source, %target, "route query for unknown city");
        return Vec::new();
    };

    // Search-scoped tables, indexed by CityId
    let city_count = graph.city_count();
    let mut dist: Vec<u64> = vec![UNREACHED; city_count];
    let mut prev: Vec<Option<(CityId, DealRef)>> = vec![None; city_count];
    let mut settled: Vec<bool> = vec![false; city_count];

    let mut frontier = BinaryHeap::new();
    dist[source_id.index()] = 0;
    frontier.push(HeapEntry {
        distance: 0,
        city: source_id,
    });

    while let Some(HeapEntry { city, .. }) = frontier.pop() {
        if settled[city.index()] {
            // Stale heap entry, a shorter path already settled this city
            continue;
        }
        settled[city.index()] = true;

        if city == target_id {
            break;
        }

        let here = dist[city.index()];
        for edge in graph.edges_from(city) {
            let candidate = here.saturating_add(edge.weight(criterion));
            if candidate < dist[edge.to.index()] {
                trace!(
                    from = %graph.city(city),
                    to = %graph.city(edge.to),
                    transport = %edge.transport,
                    distance = candidate,
                    "improved route"
                );
                dist[edge.to.index()] = candidate;
                prev[edge.to.index()] = Some((city, edge.reference.clone()));
                frontier.push(HeapEntry {
                    distance: candidate,
                    city: edge.to,
                });
            }
        }
    }

    // Walk predecessors back from the target, then reverse into travel
    // order. An unreached target (or target == source) has no predecessor
    // and yields an empty route.
    let mut references = Vec::new();
    let mut cursor = target_id;
    while let Some((predecessor, reference)) = &prev[cursor.index()] {
        references.push(reference.clone());
        cursor = *predecessor;
    }
    references.reverse();

    debug!(
        %source,
        %target,
        ?criterion,
        legs = references.len(),
        "route search finished"
    );
    references
}

/// Find the cheapest route and resolve it into full deals.
///
/// # Errors
///
/// Returns [`RouteError`] only when a found reference cannot be resolved,
/// which indicates broken reference uniqueness in the deal data. "No
/// route" is an empty `Route`, not an error.
pub fn cheapest_trip(
    graph: &DealGraph,
    deals: &[Deal],
    source: &City,
    target: &City,
) -> Result<Route, RouteError> {
    let references = find_route(graph, source, target, Criterion::Cheapest);
    resolve_route(&references, deals)
}

/// Find the quickest route and resolve it into full deals.
///
/// Shares the search algorithm with [`cheapest_trip`]; only the edge
/// weight criterion differs.
///
/// # Errors
///
/// Same as [`cheapest_trip`].
pub fn quickest_trip(
    graph: &DealGraph,
    deals: &[Deal],
    source: &City,
    target: &City,
) -> Result<Route, RouteError> {
    let references = find_route(graph, source, target, Criterion::Fastest);
    resolve_route(&references, deals)
}
