//! # Ticket Service
//!
//! The single entry point for buying tickets.
//!
//! ## Purchase Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  purchase_tickets(request)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. validate_request ──────────► shape errors        ┐                  │
//! │       │                                              │ no side          │
//! │       ▼                                              │ effects yet      │
//! │  2. TicketCounts::from_requests                      │                  │
//! │       │                                              │                  │
//! │       ▼                                              │                  │
//! │  3. check_business_rules ──────► rule errors         │                  │
//! │       │                                              │                  │
//! │       ▼                                              │                  │
//! │  4. TicketCounts::outcome (amount, seats)            ┘                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  5. PaymentGateway::charge ────► PaymentFailed (stop, no reservation)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  6. SeatReservation::reserve ──► ReservationFailed (payment stays)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PurchaseReceipt                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A reservation failure does not refund the charge. Callers that need a
//! refund must issue it themselves from the `ReservationFailed` error.
//!
//! The service keeps no state between calls, so one instance can serve
//! concurrent purchases as long as its collaborators can.

use tracing::{debug, error, info, warn};

use crate::error::{PurchaseError, PurchaseResult};
use crate::money::Money;
use crate::ports::{PaymentGateway, SeatReservation};
use crate::types::{PurchaseOutcome, PurchasePolicy, PurchaseReceipt, PurchaseRequest, TicketCounts};
use crate::validation::{check_business_rules, validate_request};

/// Validates purchase requests and drives payment and seat reservation.
#[derive(Debug, Clone)]
pub struct TicketService<P, R> {
    payment: P,
    reservation: R,
    policy: PurchasePolicy,
}

impl<P, R> TicketService<P, R>
where
    P: PaymentGateway,
    R: SeatReservation,
{
    /// Creates a service with the standard purchase policy.
    pub fn new(payment: P, reservation: R) -> Self {
        Self::with_policy(PurchasePolicy::default(), payment, reservation)
    }

    /// Creates a service with a custom policy.
    ///
    /// The policy is trusted as given; run [`PurchasePolicy::validate`]
    /// on anything loaded from configuration first.
    pub fn with_policy(policy: PurchasePolicy, payment: P, reservation: R) -> Self {
        Self {
            payment,
            reservation,
            policy,
        }
    }

    pub fn policy(&self) -> &PurchasePolicy {
        &self.policy
    }

    /// Prices a request without charging or reserving anything.
    ///
    /// Fails exactly where `purchase_tickets` would fail before step 5.
    pub fn quote(&self, request: &PurchaseRequest) -> PurchaseResult<PurchaseOutcome> {
        let (_, _, outcome) = self.evaluate(request)?;
        Ok(outcome)
    }

    /// Validates the request, charges the account, then reserves seats.
    ///
    /// ## Errors
    /// - Any shape or business-rule error, before either collaborator runs
    /// - [`PurchaseError::PaymentFailed`] if the charge fails; no seats are
    ///   reserved
    /// - [`PurchaseError::ReservationFailed`] if the reservation fails; the
    ///   charge has already gone through
    pub fn purchase_tickets(&self, request: &PurchaseRequest) -> PurchaseResult<PurchaseReceipt> {
        info!(
            account_id = ?request.account_id,
            lines = request.line_count(),
            "Initiating ticket purchase"
        );

        let (account_id, counts, outcome) = self.evaluate(request)?;

        self.process_payment(account_id, outcome.total_amount)?;
        self.reserve_seats(account_id, outcome.total_seats)?;

        let receipt = PurchaseReceipt::new(account_id, counts, outcome);

        info!(
            account_id,
            purchase_id = %receipt.purchase_id,
            adult = counts.adult,
            child = counts.child,
            infant = counts.infant,
            "Ticket purchase successful"
        );

        Ok(receipt)
    }

    /// Steps 1 to 4: everything that happens before a side effect.
    fn evaluate(
        &self,
        request: &PurchaseRequest,
    ) -> PurchaseResult<(i64, TicketCounts, PurchaseOutcome)> {
        let (account_id, lines) = validate_request(request).inspect_err(|e| {
            warn!(account_id = ?request.account_id, error = %e, "Invalid purchase request");
        })?;

        let counts = TicketCounts::from_requests(&lines);
        debug!(
            account_id,
            adult = counts.adult,
            child = counts.child,
            infant = counts.infant,
            "Aggregated ticket counts"
        );

        check_business_rules(&counts, &self.policy).inspect_err(|e| {
            warn!(account_id, error = %e, "Purchase rejected by business rules");
        })?;

        let outcome = counts.outcome(&self.policy);
        debug!(
            account_id,
            total_tickets = counts.total(),
            total_seats = outcome.total_seats,
            total_amount = %outcome.total_amount,
            "Purchase priced"
        );

        Ok((account_id, counts, outcome))
    }

    fn process_payment(&self, account_id: i64, amount: Money) -> PurchaseResult<()> {
        match self.payment.charge(account_id, amount) {
            Ok(()) => {
                info!(account_id, amount = %amount, "Payment successful");
                Ok(())
            }
            Err(e) => {
                error!(account_id, amount = %amount, error = %e, "Payment service error");
                Err(PurchaseError::PaymentFailed {
                    reason: e.to_string(),
                })
            }
        }
    }

    fn reserve_seats(&self, account_id: i64, seats: i64) -> PurchaseResult<()> {
        match self.reservation.reserve(account_id, seats) {
            Ok(()) => {
                info!(account_id, seats, "Seat reservation successful");
                Ok(())
            }
            Err(e) => {
                // The charge from step 5 stands.
                error!(account_id, seats, error = %e, "Seat reservation service error");
                Err(PurchaseError::ReservationFailed {
                    reason: e.to_string(),
                })
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
