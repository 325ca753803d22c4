//! Trip routing engine.
//!
//! This module implements the core of the system: building a weighted
//! graph from a deal list, finding the cheapest or quickest sequence of
//! deals between two cities, and resolving the found references back into
//! full deal records.

mod graph;
mod route;
mod search;

pub use graph::{CityId, Criterion, DealEdge, DealGraph};
pub use route::{Route, RouteError, resolve_route};
pub use search::{cheapest_trip, find_route, quickest_trip};
