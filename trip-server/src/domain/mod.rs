//! Domain types for the trip routing engine.
//!
//! This module contains the core domain model types that represent
//! validated deal data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod city;
mod deal;
mod duration;
mod error;
mod reference;
mod transport;

pub use city::{City, InvalidCity};
pub use deal::Deal;
pub use duration::{InvalidDuration, TripDuration};
pub use error::DomainError;
pub use reference::{DealRef, InvalidDealRef};
pub use transport::{InvalidTransportMode, TransportMode};
