//! In-memory payment and seat reservation services.
//!
//! Stand-ins for the real providers so the CLI can run a purchase end to
//! end. Each records the calls it receives and can be told to fail.

use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use tickets_core::ports::{PaymentGateway, SeatReservation};
use tickets_core::Money;
use tracing::debug;

use crate::config::SimulationSettings;

/// Failure raised by a simulated collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct SimulatedFailure(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeRecord {
    pub account_id: i64,
    pub amount: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRecord {
    pub account_id: i64,
    pub seats: i64,
}

// =============================================================================
// Payment
// =============================================================================

#[derive(Debug, Default)]
pub struct InMemoryPaymentGateway {
    charges: Mutex<Vec<ChargeRecord>>,
    fail_with: Option<String>,
}

impl InMemoryPaymentGateway {
    pub fn new(fail_with: Option<String>) -> Self {
        Self {
            charges: Mutex::default(),
            fail_with,
        }
    }

    /// Every charge attempted so far, failed ones included.
    pub fn charges(&self) -> Vec<ChargeRecord> {
        self.charges
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PaymentGateway for InMemoryPaymentGateway {
    type Error = SimulatedFailure;

    fn charge(&self, account_id: i64, amount: Money) -> Result<(), SimulatedFailure> {
        debug!(account_id, amount = %amount, "Simulated charge");
        self.charges
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ChargeRecord { account_id, amount });

        match &self.fail_with {
            Some(reason) => Err(SimulatedFailure(reason.clone())),
            None => Ok(()),
        }
    }
}

// =============================================================================
// Seat Reservation
// =============================================================================

#[derive(Debug, Default)]
pub struct InMemorySeatReservation {
    reservations: Mutex<Vec<ReservationRecord>>,
    fail_with: Option<String>,
}

impl InMemorySeatReservation {
    pub fn new(fail_with: Option<String>) -> Self {
        Self {
            reservations: Mutex::default(),
            fail_with,
        }
    }

    /// Every reservation attempted so far, failed ones included.
    pub fn reservations(&self) -> Vec<ReservationRecord> {
        self.reservations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SeatReservation for InMemorySeatReservation {
    type Error = SimulatedFailure;

    fn reserve(&self, account_id: i64, seat_count: i64) -> Result<(), SimulatedFailure> {
        debug!(account_id, seats = seat_count, "Simulated seat reservation");
        self.reservations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ReservationRecord {
                account_id,
                seats: seat_count,
            });

        match &self.fail_with {
            Some(reason) => Err(SimulatedFailure(reason.clone())),
            None => Ok(()),
        }
    }
}

/// Builds both collaborators from the `[simulation]` settings.
pub fn collaborators(
    settings: &SimulationSettings,
) -> (InMemoryPaymentGateway, InMemorySeatReservation) {
    (
        InMemoryPaymentGateway::new(settings.fail_payment.clone()),
        InMemorySeatReservation::new(settings.fail_reservation.clone()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickets_core::{PurchaseError, PurchaseRequest, TicketService, TicketType, TicketTypeRequest};

    fn family() -> PurchaseRequest {
        PurchaseRequest::new(
            3,
            vec![
                TicketTypeRequest::new(TicketType::Adult, 2),
                TicketTypeRequest::new(TicketType::Child, 1),
                TicketTypeRequest::new(TicketType::Infant, 1),
            ],
        )
    }

    #[test]
    fn test_records_successful_purchase() {
        let (payment, reservation) = collaborators(&SimulationSettings::default());
        let service = TicketService::new(&payment, &reservation);

        service.purchase_tickets(&family()).unwrap();

        assert_eq!(
            payment.charges(),
            vec![ChargeRecord {
                account_id: 3,
                amount: Money::from_units(50)
            }]
        );
        assert_eq!(
            reservation.reservations(),
            vec![ReservationRecord {
                account_id: 3,
                seats: 3
            }]
        );
    }

    #[test]
    fn test_scripted_payment_failure() {
        let settings = SimulationSettings {
            fail_payment: Some("card declined".to_string()),
            fail_reservation: None,
        };
        let (payment, reservation) = collaborators(&settings);
        let service = TicketService::new(&payment, &reservation);

        let err = service.purchase_tickets(&family()).unwrap_err();
        assert_eq!(
            err,
            PurchaseError::PaymentFailed {
                reason: "card declined".to_string()
            }
        );
        assert_eq!(payment.charges().len(), 1);
        assert!(reservation.reservations().is_empty());
    }

    #[test]
    fn test_scripted_reservation_failure() {
        let settings = SimulationSettings {
            fail_payment: None,
            fail_reservation: Some("theatre full".to_string()),
        };
        let (payment, reservation) = collaborators(&settings);
        let service = TicketService::new(&payment, &reservation);

        let err = service.purchase_tickets(&family()).unwrap_err();
        assert!(matches!(err, PurchaseError::ReservationFailed { .. }));
        assert_eq!(payment.charges().len(), 1);
        assert_eq!(reservation.reservations().len(), 1);
    }
}
