//! # Domain Types
//!
//! Core domain types used throughout the ticket purchasing flow.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌───────────────────┐   ┌─────────────────┐     │
//! │  │ PurchaseRequest │   │ TicketTypeRequest │   │   TicketType    │     │
//! │  │  ─────────────  │   │  ───────────────  │   │  ─────────────  │     │
//! │  │  account_id     │──►│  ticket_type      │──►│  Adult          │     │
//! │  │  ticket_requests│   │  quantity         │   │  Child          │     │
//! │  └─────────────────┘   └───────────────────┘   │  Infant         │     │
//! │                                                 └─────────────────┘     │
//! │           │ aggregate                                                   │
//! │           ▼                                                             │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  TicketCounts   │──►│ PurchaseOutcome │──►│ PurchaseReceipt │       │
//! │  │  adult/child/   │   │  total_amount   │   │  purchase_id    │       │
//! │  │  infant         │   │  total_seats    │   │  completed_at   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │           ▲                                                             │
//! │           │ prices + limit                                              │
//! │  ┌─────────────────┐                                                    │
//! │  │ PurchasePolicy  │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here outlives a single `purchase_tickets` call except the
//! policy, which the service holds for its whole lifetime.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::{ADULT_PRICE, CHILD_PRICE, INFANT_PRICE, MAX_TICKETS_PER_PURCHASE};

// =============================================================================
// Ticket Type
// =============================================================================

/// The kind of ticket being bought. Determines price and seat occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Adult,
    Child,
    /// Sits on an adult's lap; never occupies a seat.
    Infant,
}

impl TicketType {
    /// Every ticket type, in pricing order.
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Whether a ticket of this type needs a reserved seat.
    #[inline]
    pub const fn occupies_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }
}

// =============================================================================
// Ticket Type Request
// =============================================================================

/// One line of a purchase: a ticket type and how many of it.
///
/// Immutable once built. The same type may appear on several lines of one
/// request; the lines are summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    quantity: i64,
}

impl TicketTypeRequest {
    pub const fn new(ticket_type: TicketType, quantity: i64) -> Self {
        Self {
            ticket_type,
            quantity,
        }
    }

    #[inline]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    #[inline]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }
}

// =============================================================================
// Purchase Request
// =============================================================================

/// A purchase request as handed over by a transport layer.
///
/// Both fields are optional, and so is every line, because JSON callers can
/// send `null` in any of those places. `validation::validate_request`
/// turns this loose shape into a checked account id and line list.
///
/// ```json
/// {
///   "accountId": 1,
///   "ticketRequests": [
///     { "ticketType": "ADULT", "quantity": 2 },
///     { "ticketType": "INFANT", "quantity": 1 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub account_id: Option<i64>,
    pub ticket_requests: Option<Vec<Option<TicketTypeRequest>>>,
}

impl PurchaseRequest {
    /// Builds a request from values that cannot be absent.
    pub fn new(account_id: i64, ticket_requests: Vec<TicketTypeRequest>) -> Self {
        Self {
            account_id: Some(account_id),
            ticket_requests: Some(ticket_requests.into_iter().map(Some).collect()),
        }
    }

    /// Number of lines in the request, null lines included.
    pub fn line_count(&self) -> usize {
        self.ticket_requests.as_ref().map_or(0, Vec::len)
    }
}

// =============================================================================
// Ticket Counts
// =============================================================================

/// Ticket quantities summed per type across every line of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TicketCounts {
    pub adult: i64,
    pub child: i64,
    pub infant: i64,
}

impl TicketCounts {
    /// Sums quantities per ticket type. Line order does not matter.
    ///
    /// ## Example
    /// ```rust
    /// use tickets_core::{TicketCounts, TicketType, TicketTypeRequest};
    ///
    /// let counts = TicketCounts::from_requests(&[
    ///     TicketTypeRequest::new(TicketType::Adult, 1),
    ///     TicketTypeRequest::new(TicketType::Child, 2),
    ///     TicketTypeRequest::new(TicketType::Adult, 1),
    /// ]);
    /// assert_eq!(counts.adult, 2);
    /// assert_eq!(counts.child, 2);
    /// assert_eq!(counts.infant, 0);
    /// ```
    pub fn from_requests<'a, I>(requests: I) -> Self
    where
        I: IntoIterator<Item = &'a TicketTypeRequest>,
    {
        requests
            .into_iter()
            .fold(TicketCounts::default(), |mut counts, request| {
                let slot = match request.ticket_type() {
                    TicketType::Adult => &mut counts.adult,
                    TicketType::Child => &mut counts.child,
                    TicketType::Infant => &mut counts.infant,
                };
                *slot = slot.saturating_add(request.quantity());
                counts
            })
    }

    /// Number of tickets of one type.
    #[inline]
    pub const fn of(&self, ticket_type: TicketType) -> i64 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }

    /// All tickets, infants included.
    #[inline]
    pub const fn total(&self) -> i64 {
        self.adult.saturating_add(self.child).saturating_add(self.infant)
    }

    /// Seats to reserve: every ticket type that occupies a seat.
    pub fn seats(&self) -> i64 {
        TicketType::ALL
            .into_iter()
            .filter(TicketType::occupies_seat)
            .fold(0, |seats, t| seats.saturating_add(self.of(t)))
    }

    /// Prices the counts under a policy.
    ///
    /// Only call this on counts that passed the business rules; the
    /// ticket limit is what keeps the multiplication small.
    pub fn outcome(&self, policy: &PurchasePolicy) -> PurchaseOutcome {
        let total_amount: Money = TicketType::ALL
            .into_iter()
            .map(|t| policy.price_of(t).multiply_quantity(self.of(t)))
            .sum();

        PurchaseOutcome {
            total_amount,
            total_seats: self.seats(),
        }
    }
}

// =============================================================================
// Purchase Outcome
// =============================================================================

/// What a purchase commits: the amount charged and the seats reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOutcome {
    pub total_amount: Money,
    pub total_seats: i64,
}

// =============================================================================
// Purchase Receipt
// =============================================================================

/// Returned to the caller once both the charge and the reservation went
/// through. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseReceipt {
    /// Unique identifier (UUID v4).
    pub purchase_id: String,
    pub account_id: i64,
    pub counts: TicketCounts,
    pub total_amount: Money,
    pub total_seats: i64,
    #[ts(as = "String")]
    pub completed_at: DateTime<Utc>,
}

impl PurchaseReceipt {
    pub fn new(account_id: i64, counts: TicketCounts, outcome: PurchaseOutcome) -> Self {
        Self {
            purchase_id: Uuid::new_v4().to_string(),
            account_id,
            counts,
            total_amount: outcome.total_amount,
            total_seats: outcome.total_seats,
            completed_at: Utc::now(),
        }
    }
}

// =============================================================================
// Configuration Types
// =============================================================================

/// Prices and the per-purchase ticket limit.
///
/// `PurchasePolicy::default()` is the standing business policy
/// (25 tickets, 20/10/0). Outer layers may load a different one from
/// configuration; it must pass [`PurchasePolicy::validate`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchasePolicy {
    pub max_tickets_per_purchase: i64,
    pub adult_price: Money,
    pub child_price: Money,
    pub infant_price: Money,
}

impl PurchasePolicy {
    /// Unit price of one ticket type.
    #[inline]
    pub const fn price_of(&self, ticket_type: TicketType) -> Money {
        match ticket_type {
            TicketType::Adult => self.adult_price,
            TicketType::Child => self.child_price,
            TicketType::Infant => self.infant_price,
        }
    }

    /// Checks the limit and every price.
    pub fn validate(&self) -> Result<(), ValidationError> {
        crate::validation::validate_policy(self)
    }
}

impl Default for PurchasePolicy {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: MAX_TICKETS_PER_PURCHASE,
            adult_price: ADULT_PRICE,
            child_price: CHILD_PRICE,
            infant_price: INFANT_PRICE,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
