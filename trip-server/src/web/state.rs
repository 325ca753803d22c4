//! Application state for the web layer.

use std::sync::Arc;

use crate::dataset::DealSet;
use crate::router::DealGraph;

/// Shared application state.
///
/// The graph is built once from the dataset at startup; it is read-only
/// afterwards, so concurrent searches share it without synchronization.
#[derive(Clone)]
pub struct AppState {
    /// The validated deal dataset
    pub deals: Arc<DealSet>,

    /// The deal graph built from the dataset
    pub graph: Arc<DealGraph>,
}

impl AppState {
    /// Create a new app state, building the graph from the dataset.
    pub fn new(deals: DealSet) -> Self {
        let graph = DealGraph::build(deals.deals());
        Self {
            deals: Arc::new(deals),
            graph: Arc::new(graph),
        }
    }
}
