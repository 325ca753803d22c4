//! Trip sorter server.
//!
//! A web application that answers: "what is the cheapest, or the quickest,
//! combination of travel deals between these two cities?"

pub mod dataset;
pub mod domain;
pub mod router;
pub mod web;
