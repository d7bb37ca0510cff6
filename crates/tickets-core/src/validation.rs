//! # Validation Module
//!
//! Request shape checks and purchase business rules.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Request shape (validate_request)                             │
//! │  ├── account id present and > 0                                        │
//! │  ├── ticket list present and non-empty                                 │
//! │  ├── per line, in order: not null, quantity >= 0                       │
//! │  └── at least one ticket overall                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Business rules (check_business_rules)                        │
//! │  ├── 1. child/infant needs an adult                                    │
//! │  ├── 2. total within the per-purchase limit                            │
//! │  └── 3. no more infants than adults                                    │
//! │                                                                         │
//! │  The first failing check is the one reported.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The rule order is fixed: a request for 26 children with no adult is
//! reported as `NoAdultForDependent`, never as `TooManyTickets`.
//!
//! ## Usage
//! ```rust
//! use tickets_core::validation::{check_business_rules, validate_request};
//! use tickets_core::{PurchasePolicy, PurchaseRequest, TicketCounts, TicketType, TicketTypeRequest};
//!
//! let request = PurchaseRequest::new(1, vec![TicketTypeRequest::new(TicketType::Adult, 2)]);
//! let (account_id, lines) = validate_request(&request).unwrap();
//! assert_eq!(account_id, 1);
//!
//! let counts = TicketCounts::from_requests(&lines);
//! check_business_rules(&counts, &PurchasePolicy::default()).unwrap();
//! ```

use crate::error::{PurchaseError, PurchaseResult, ValidationError};
use crate::types::{PurchasePolicy, PurchaseRequest, TicketCounts, TicketTypeRequest};

/// Result type for policy validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Request Shape
// =============================================================================

/// Validates an account id.
///
/// ## Rules
/// - Must be present
/// - Must be strictly positive
pub fn validate_account_id(account_id: Option<i64>) -> PurchaseResult<i64> {
    match account_id {
        Some(id) if id > 0 => Ok(id),
        _ => Err(PurchaseError::InvalidAccount),
    }
}

/// Validates the ticket lines and returns them without the `Option` layers.
///
/// ## Rules
/// - The list must be present and non-empty
/// - Walking the lines in order, the first null line or negative quantity
///   is reported
/// - The quantities must add up to at least one ticket
pub fn validate_ticket_requests(
    ticket_requests: Option<&[Option<TicketTypeRequest>]>,
) -> PurchaseResult<Vec<TicketTypeRequest>> {
    let lines = match ticket_requests {
        Some(lines) if !lines.is_empty() => lines,
        _ => return Err(PurchaseError::NoTicketTypeRequested),
    };

    let mut checked = Vec::with_capacity(lines.len());
    let mut total: i64 = 0;

    for (index, line) in lines.iter().enumerate() {
        let line = line.ok_or(PurchaseError::NullTicketRequest { index })?;

        let quantity = line.quantity();
        if quantity < 0 {
            return Err(PurchaseError::NegativeQuantity { index, quantity });
        }

        total = total.saturating_add(quantity);
        checked.push(line);
    }

    if total == 0 {
        return Err(PurchaseError::NoTicketsRequested);
    }

    Ok(checked)
}

/// Runs every shape check on a request, account first.
pub fn validate_request(request: &PurchaseRequest) -> PurchaseResult<(i64, Vec<TicketTypeRequest>)> {
    let account_id = validate_account_id(request.account_id)?;
    let lines = validate_ticket_requests(request.ticket_requests.as_deref())?;
    Ok((account_id, lines))
}

// =============================================================================
// Business Rules
// =============================================================================

/// Checks aggregated counts against the purchase rules, in order.
///
/// ## Rules
/// 1. Child or infant tickets need at least one adult ticket
/// 2. Total tickets must not exceed `policy.max_tickets_per_purchase`
/// 3. Infants must not outnumber adults (one lap per infant)
pub fn check_business_rules(counts: &TicketCounts, policy: &PurchasePolicy) -> PurchaseResult<()> {
    if (counts.child > 0 || counts.infant > 0) && counts.adult == 0 {
        return Err(PurchaseError::NoAdultForDependent);
    }

    let total = counts.total();
    if total > policy.max_tickets_per_purchase {
        return Err(PurchaseError::TooManyTickets {
            requested: total,
            max: policy.max_tickets_per_purchase,
        });
    }

    if counts.infant > counts.adult {
        return Err(PurchaseError::TooManyInfants {
            infants: counts.infant,
            adults: counts.adult,
        });
    }

    Ok(())
}

// =============================================================================
// Policy Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (infants travel free)
/// - Must not exceed `max_units`
pub fn validate_price(field: &str, units: i64, max_units: i64) -> ValidationResult<()> {
    if !(0..=max_units).contains(&units) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: max_units,
        });
    }

    Ok(())
}

/// Highest unit price a policy may carry.
///
/// A purchase holds at most `max_tickets_per_purchase` tickets, so any
/// total stays within `i64` when every price is at or below this.
/// A non-positive limit allows no purchase, so any price is fine.
pub const fn max_price_for(max_tickets_per_purchase: i64) -> i64 {
    if max_tickets_per_purchase <= 0 {
        return i64::MAX;
    }
    i64::MAX / max_tickets_per_purchase
}

/// Validates a policy loaded from configuration.
///
/// ## Rules
/// - The ticket limit must be positive
/// - Every price must be non-negative and small enough that a full
///   purchase cannot overflow the total
pub fn validate_policy(policy: &PurchasePolicy) -> ValidationResult<()> {
    if policy.max_tickets_per_purchase <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "max_tickets_per_purchase".to_string(),
        });
    }

    let max_price = max_price_for(policy.max_tickets_per_purchase);
    validate_price("adult_price", policy.adult_price.units(), max_price)?;
    validate_price("child_price", policy.child_price.units(), max_price)?;
    validate_price("infant_price", policy.infant_price.units(), max_price)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
