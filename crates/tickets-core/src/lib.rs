//! # tickets-core: Pure Business Logic for Ticket Purchasing
//!
//! This crate decides whether a ticket purchase may go ahead, what it
//! costs, and how many seats it needs. It performs no I/O of its own: the
//! payment and the seat reservation are reached through injected traits.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Ticket Purchasing                                 │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Transport (tickets-cli, HTTP handler, ...)            │   │
//! │  │        builds a PurchaseRequest, shows the receipt/error        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ tickets-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validation │  │  service  │  │   │
//! │  │   │ Request   │  │   Money   │  │ shape      │  │  Ticket   │  │   │
//! │  │   │ Counts    │  │           │  │ rules      │  │  Service  │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └─────┬─────┘  │   │
//! │  │                                                       │        │   │
//! │  └───────────────────────────────────────────────────────┼────────┘   │
//! │                                          ports           │            │
//! │                         ┌────────────────────────────────┴──┐         │
//! │                         ▼                                   ▼         │
//! │                 PaymentGateway                     SeatReservation    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Requests, aggregated counts, receipts, purchase policy
//! - [`money`] - Integer money type
//! - [`error`] - Purchase and validation errors
//! - [`validation`] - Request shape checks and business rules
//! - [`ports`] - Payment and seat reservation traits
//! - [`service`] - `TicketService`, the purchase pipeline
//!
//! ## Example Usage
//!
//! ```rust
//! use std::convert::Infallible;
//! use tickets_core::ports::{PaymentGateway, SeatReservation};
//! use tickets_core::{Money, PurchaseRequest, TicketService, TicketType, TicketTypeRequest};
//!
//! struct AlwaysPays;
//! impl PaymentGateway for AlwaysPays {
//!     type Error = Infallible;
//!     fn charge(&self, _account_id: i64, _amount: Money) -> Result<(), Infallible> {
//!         Ok(())
//!     }
//! }
//!
//! struct AlwaysSeats;
//! impl SeatReservation for AlwaysSeats {
//!     type Error = Infallible;
//!     fn reserve(&self, _account_id: i64, _seats: i64) -> Result<(), Infallible> {
//!         Ok(())
//!     }
//! }
//!
//! let service = TicketService::new(AlwaysPays, AlwaysSeats);
//! let request = PurchaseRequest::new(
//!     1,
//!     vec![
//!         TicketTypeRequest::new(TicketType::Adult, 2),
//!         TicketTypeRequest::new(TicketType::Child, 1),
//!         TicketTypeRequest::new(TicketType::Infant, 1),
//!     ],
//! );
//!
//! let receipt = service.purchase_tickets(&request).unwrap();
//! assert_eq!(receipt.total_amount, Money::from_units(50));
//! assert_eq!(receipt.total_seats, 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod ports;
pub mod service;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{PurchaseError, PurchaseErrorKind, PurchaseResult, ValidationError};
pub use money::Money;
pub use service::TicketService;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum tickets (infants included) in a single purchase.
pub const MAX_TICKETS_PER_PURCHASE: i64 = 25;

/// Unit price of an adult ticket.
pub const ADULT_PRICE: Money = Money::from_units(20);

/// Unit price of a child ticket.
pub const CHILD_PRICE: Money = Money::from_units(10);

/// Infants sit on an adult's lap and travel free.
pub const INFANT_PRICE: Money = Money::from_units(0);
