//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from dataset/IO errors.

/// Domain-level errors for deal validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Cost is negative or not a finite number
    #[error("cost must be a finite non-negative number, got {0}")]
    InvalidCost(f64),

    /// Discount percentage is outside [0, 100]
    #[error("discount must be a percentage in [0, 100], got {0}")]
    InvalidDiscount(f64),
}
