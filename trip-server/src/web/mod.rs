//! Web layer for the trip sorter.
//!
//! Provides the trip search form and the search endpoint.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
