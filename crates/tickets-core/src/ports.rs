//! # Collaborator Ports
//!
//! The two side effects of a purchase, as traits the core calls but never
//! implements.
//!
//! ```text
//! ┌──────────────────────┐   charge(account, amount)   ┌──────────────────┐
//! │                      │ ──────────────────────────► │  PaymentGateway  │
//! │    TicketService     │                             └──────────────────┘
//! │    (tickets-core)    │   reserve(account, seats)   ┌──────────────────┐
//! │                      │ ──────────────────────────► │ SeatReservation  │
//! └──────────────────────┘                             └──────────────────┘
//! ```
//!
//! Implementations own their own concurrency, retries and timeouts. The
//! core only sees `Ok(())` or an error whose `Display` text it forwards.

use std::sync::Arc;

use crate::money::Money;

/// Debits an amount from an account.
pub trait PaymentGateway {
    type Error: std::error::Error;

    fn charge(&self, account_id: i64, amount: Money) -> Result<(), Self::Error>;
}

/// Reserves a number of seats for an account.
pub trait SeatReservation {
    type Error: std::error::Error;

    fn reserve(&self, account_id: i64, seat_count: i64) -> Result<(), Self::Error>;
}

// =============================================================================
// Forwarding Impls
// =============================================================================
// Lets a test keep an `Arc` to its double while the service holds another.

impl<T: PaymentGateway + ?Sized> PaymentGateway for &T {
    type Error = T::Error;

    fn charge(&self, account_id: i64, amount: Money) -> Result<(), Self::Error> {
        (**self).charge(account_id, amount)
    }
}

impl<T: PaymentGateway + ?Sized> PaymentGateway for Box<T> {
    type Error = T::Error;

    fn charge(&self, account_id: i64, amount: Money) -> Result<(), Self::Error> {
        (**self).charge(account_id, amount)
    }
}

impl<T: PaymentGateway + ?Sized> PaymentGateway for Arc<T> {
    type Error = T::Error;

    fn charge(&self, account_id: i64, amount: Money) -> Result<(), Self::Error> {
        (**self).charge(account_id, amount)
    }
}

impl<T: SeatReservation + ?Sized> SeatReservation for &T {
    type Error = T::Error;

    fn reserve(&self, account_id: i64, seat_count: i64) -> Result<(), Self::Error> {
        (**self).reserve(account_id, seat_count)
    }
}

impl<T: SeatReservation + ?Sized> SeatReservation for Box<T> {
    type Error = T::Error;

    fn reserve(&self, account_id: i64, seat_count: i64) -> Result<(), Self::Error> {
        (**self).reserve(account_id, seat_count)
    }
}

impl<T: SeatReservation + ?Sized> SeatReservation for Arc<T> {
    type Error = T::Error;

    fn reserve(&self, account_id: i64, seat_count: i64) -> Result<(), Self::Error> {
        (**self).reserve(account_id, seat_count)
    }
}
