//! # tickets-cli
//!
//! Runs a JSON purchase request through `tickets-core` against simulated
//! payment and seat reservation services.
//!
//! ## Flow
//! ```text
//! request.json ──► parse_request ──► TicketService ──► receipt (stdout)
//!                                        │    │
//!                   tickets.toml + env ──┘    └──► InMemoryPaymentGateway
//!                   (policy, failures)             InMemorySeatReservation
//! ```
//!
//! ## Configuration
//! See [`config`] for `tickets.toml` and the `TICKETS_*` variables.
//! Log output is controlled by `RUST_LOG`.

pub mod config;
pub mod error;
pub mod simulation;

use tickets_core::{PurchaseError, PurchaseRequest};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::error::{exit_code, exit_code_for};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks debug or info for
/// the workspace crates. Logs go to stderr so stdout stays pure JSON.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "warn,tickets_core=debug,tickets_cli=debug"
    } else {
        "warn,tickets_core=info,tickets_cli=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses a purchase request from JSON text.
pub fn parse_request(json: &str) -> Result<PurchaseRequest, serde_json::Error> {
    serde_json::from_str(json)
}

/// Picks the exit code for a failed run and logs the failure.
///
/// Purchase failures keep their own code; anything else happened while
/// loading configuration or input.
pub fn report_failure(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PurchaseError>() {
        Some(purchase_error) => {
            error!(kind = ?purchase_error.kind(), "Purchase failed: {}", purchase_error);
            exit_code_for(purchase_error)
        }
        None => {
            error!("{:#}", err);
            exit_code::SETUP_FAILED
        }
    }
}
