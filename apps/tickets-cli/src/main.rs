//! # tickets-cli Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (stderr)
//! 3. Load configuration (env > tickets.toml > defaults)
//! 4. Read the purchase request (file or stdin)
//! 5. Quote or purchase through `TicketService`
//! 6. Print JSON to stdout, exit with a code per outcome

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use tickets_cli::config::CliConfig;
use tickets_cli::{init_logging, parse_request, report_failure, simulation};
use tickets_core::TicketService;

/// Validate and run a ticket purchase request.
#[derive(Debug, Parser)]
#[command(name = "tickets-cli", version)]
struct Args {
    /// Path to a JSON purchase request, or `-` for stdin.
    request: String,

    /// Path to tickets.toml (defaults to the platform config dir).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Price the request without charging or reserving.
    #[arg(long)]
    quote: bool,

    /// Debug logging for the ticket crates.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        let code = report_failure(&e);
        eprintln!("❌ {:#}", e);
        std::process::exit(code);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = CliConfig::load(args.config.clone()).context("Failed to load configuration")?;
    info!(
        max_tickets = config.policy.max_tickets_per_purchase,
        adult_price = %config.policy.adult_price,
        child_price = %config.policy.child_price,
        infant_price = %config.policy.infant_price,
        "Configuration loaded"
    );

    let json = read_input(&args.request)?;
    let request = parse_request(&json).context("Purchase request is not valid JSON")?;

    let (payment, reservation) = simulation::collaborators(&config.simulation);
    let service = TicketService::with_policy(config.policy, &payment, &reservation);

    let output = if args.quote {
        serde_json::to_string_pretty(&service.quote(&request)?)?
    } else {
        serde_json::to_string_pretty(&service.purchase_tickets(&request)?)?
    };
    println!("{}", output);

    Ok(())
}

fn read_input(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read request from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read request file {}", source))
    }
}
