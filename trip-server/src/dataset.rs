//! Deal dataset loading.
//!
//! Deals arrive as a JSON document with a currency code and a flat deal
//! list; durations are zero-padded "HH"/"MM" strings on the wire. This
//! module deserializes that format and validates every record into domain
//! types before anything downstream sees it.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{City, Deal, DealRef, TransportMode, TripDuration};

/// Error from dataset loading or validation.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Failed to read the dataset file
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset is not valid JSON
    #[error("failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A deal record failed validation
    #[error("invalid deal record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// Two deals share a reference, breaking route resolution
    #[error("duplicate deal reference: {0}")]
    DuplicateReference(DealRef),
}

/// Wire format of a duration: zero-padded hour and minute strings.
#[derive(Debug, Deserialize)]
struct RawDuration {
    h: String,
    m: String,
}

/// Wire format of a single deal.
#[derive(Debug, Deserialize)]
struct RawDeal {
    transport: String,
    departure: String,
    arrival: String,
    duration: RawDuration,
    cost: f64,
    discount: f64,
    reference: String,
}

/// Wire format of the whole dataset.
#[derive(Debug, Deserialize)]
struct RawDealSet {
    currency: String,
    deals: Vec<RawDeal>,
}

/// A validated deal dataset.
///
/// Holds the full deal list in input order plus the display currency.
/// References are guaranteed unique across the list.
#[derive(Debug, Clone)]
pub struct DealSet {
    currency: String,
    deals: Vec<Deal>,
}

impl DealSet {
    /// Parse and validate a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: RawDealSet = serde_json::from_str(json)?;

        let mut deals = Vec::with_capacity(raw.deals.len());
        let mut seen = HashSet::new();
        for (index, record) in raw.deals.iter().enumerate() {
            let deal = validate_record(record)
                .map_err(|reason| DatasetError::InvalidRecord { index, reason })?;
            if !seen.insert(deal.reference().clone()) {
                return Err(DatasetError::DuplicateReference(deal.reference().clone()));
            }
            deals.push(deal);
        }

        Ok(Self {
            currency: raw.currency,
            deals,
        })
    }

    /// Load and validate a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The display currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// All deals, in input order.
    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    /// Distinct departure cities, in first-seen order.
    pub fn departure_cities(&self) -> Vec<&City> {
        dedup_in_order(self.deals.iter().map(|d| d.departure()))
    }

    /// Distinct arrival cities, in first-seen order.
    pub fn arrival_cities(&self) -> Vec<&City> {
        dedup_in_order(self.deals.iter().map(|d| d.arrival()))
    }
}

fn dedup_in_order<'a>(cities: impl Iterator<Item = &'a City>) -> Vec<&'a City> {
    let mut seen = HashSet::new();
    cities.filter(|c| seen.insert(*c)).collect()
}

fn validate_record(record: &RawDeal) -> Result<Deal, String> {
    let departure = City::parse(&record.departure).map_err(|e| e.to_string())?;
    let arrival = City::parse(&record.arrival).map_err(|e| e.to_string())?;
    let transport = TransportMode::parse(&record.transport).map_err(|e| e.to_string())?;
    let reference = DealRef::parse(&record.reference).map_err(|e| e.to_string())?;

    let hours = parse_component(&record.duration.h, "hours")?;
    let minutes = parse_component(&record.duration.m, "minutes")?;
    let duration = TripDuration::new(hours, minutes).map_err(|e| e.to_string())?;

    Deal::new(
        departure,
        arrival,
        transport,
        record.cost,
        record.discount,
        duration,
        reference,
    )
    .map_err(|e| e.to_string())
}

fn parse_component(s: &str, field: &str) -> Result<u32, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("duration {field} is not a number: {s:?}"))
}
