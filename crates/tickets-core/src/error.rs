//! # Error Types
//!
//! Domain-specific error types for tickets-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tickets-core errors (this file)                                       │
//! │  ├── PurchaseError    - Every way a purchase can fail                  │
//! │  │   ├── request shape   (before any side effect)                      │
//! │  │   ├── business rules  (before any side effect)                      │
//! │  │   └── collaborators   (payment / seat reservation)                  │
//! │  └── ValidationError  - Field-level checks on PurchasePolicy           │
//! │                                                                         │
//! │  tickets-cli errors (in app)                                           │
//! │  └── ConfigError      - Unreadable or invalid configuration            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item index, counts, limits)
//! 3. Errors are enum variants, never String
//! 4. Collaborator failures keep the collaborator's own message

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Purchase Error
// =============================================================================

/// Every failure `TicketService::purchase_tickets` can report.
///
/// ## Failure Stages
/// ```text
/// validate shape ──► aggregate ──► business rules ──► charge ──► reserve
///      │                               │                │          │
///      ▼                               ▼                ▼          ▼
/// InvalidAccount                NoAdultForDependent  Payment   Reservation
/// NoTicketTypeRequested         TooManyTickets       Failed    Failed
/// NullTicketRequest             TooManyInfants
/// NegativeQuantity
/// NoTicketsRequested
/// ```
///
/// Everything left of `PaymentFailed` is raised before any collaborator is
/// called. `ReservationFailed` is raised after the payment went through and
/// the payment is NOT reversed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// Account id is missing, zero or negative.
    #[error("Account id must be valid")]
    InvalidAccount,

    /// The ticket request list is missing or empty.
    #[error("At least one ticket type must be requested")]
    NoTicketTypeRequested,

    /// An entry in the ticket request list is null.
    #[error("Ticket request must not be null (item {index})")]
    NullTicketRequest { index: usize },

    /// An entry asks for a negative number of tickets.
    #[error("Ticket quantity must be positive (item {index}: {quantity})")]
    NegativeQuantity { index: usize, quantity: i64 },

    /// Every entry asks for zero tickets.
    #[error("At least one ticket must be requested")]
    NoTicketsRequested,

    /// Child or infant tickets without a single adult ticket.
    #[error("Adult ticket must be purchased for child or infant")]
    NoAdultForDependent,

    /// More tickets than a single purchase allows.
    #[error("Total tickets must not exceed {max} (requested {requested})")]
    TooManyTickets { requested: i64, max: i64 },

    /// Infants sit on an adult's lap, so there must be one adult per infant.
    #[error(
        "Infant tickets cannot be more than adult tickets ({infants} infants, {adults} adults)"
    )]
    TooManyInfants { infants: i64, adults: i64 },

    /// The payment gateway rejected the charge.
    #[error("Payment failed: {reason}")]
    PaymentFailed { reason: String },

    /// The seat reservation service rejected the reservation.
    #[error("Seat reservation failed: {reason}")]
    ReservationFailed { reason: String },
}

/// Fieldless discriminant of [`PurchaseError`].
///
/// Serialized in `SCREAMING_SNAKE_CASE` so outer layers can hand a stable
/// error code to their callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseErrorKind {
    InvalidAccount,
    NoTicketTypeRequested,
    NullTicketRequest,
    NegativeQuantity,
    NoTicketsRequested,
    NoAdultForDependent,
    TooManyTickets,
    TooManyInfants,
    PaymentFailed,
    ReservationFailed,
}

impl PurchaseError {
    /// Returns the kind of failure without its context.
    pub fn kind(&self) -> PurchaseErrorKind {
        match self {
            PurchaseError::InvalidAccount => PurchaseErrorKind::InvalidAccount,
            PurchaseError::NoTicketTypeRequested => PurchaseErrorKind::NoTicketTypeRequested,
            PurchaseError::NullTicketRequest { .. } => PurchaseErrorKind::NullTicketRequest,
            PurchaseError::NegativeQuantity { .. } => PurchaseErrorKind::NegativeQuantity,
            PurchaseError::NoTicketsRequested => PurchaseErrorKind::NoTicketsRequested,
            PurchaseError::NoAdultForDependent => PurchaseErrorKind::NoAdultForDependent,
            PurchaseError::TooManyTickets { .. } => PurchaseErrorKind::TooManyTickets,
            PurchaseError::TooManyInfants { .. } => PurchaseErrorKind::TooManyInfants,
            PurchaseError::PaymentFailed { .. } => PurchaseErrorKind::PaymentFailed,
            PurchaseError::ReservationFailed { .. } => PurchaseErrorKind::ReservationFailed,
        }
    }

    /// True when the request was rejected before any collaborator was called.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            PurchaseError::PaymentFailed { .. } | PurchaseError::ReservationFailed { .. }
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation errors.
///
/// Used when checking a `PurchasePolicy` built from configuration, before
/// any purchase runs against it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PurchaseError.
pub type PurchaseResult<T> = Result<T, PurchaseError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PurchaseError::InvalidAccount.to_string(),
            "Account id must be valid"
        );
        assert_eq!(
            PurchaseError::TooManyTickets {
                requested: 26,
                max: 25
            }
            .to_string(),
            "Total tickets must not exceed 25 (requested 26)"
        );
        assert_eq!(
            PurchaseError::PaymentFailed {
                reason: "card declined".to_string()
            }
            .to_string(),
            "Payment failed: card declined"
        );
    }

    #[test]
    fn test_kind_and_stage() {
        let err = PurchaseError::NegativeQuantity {
            index: 1,
            quantity: -3,
        };
        assert_eq!(err.kind(), PurchaseErrorKind::NegativeQuantity);
        assert!(err.is_validation());

        let err = PurchaseError::ReservationFailed {
            reason: "no seats".to_string(),
        };
        assert_eq!(err.kind(), PurchaseErrorKind::ReservationFailed);
        assert!(!err.is_validation());
    }

    #[test]
    fn test_kind_serializes_as_code() {
        let json = serde_json::to_string(&PurchaseErrorKind::NoAdultForDependent).unwrap();
        assert_eq!(json, "\"NO_ADULT_FOR_DEPENDENT\"");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "max_tickets_per_purchase".to_string(),
        };
        assert_eq!(err.to_string(), "max_tickets_per_purchase must be positive");
    }
}
