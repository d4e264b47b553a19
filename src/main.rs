use clap::Parser;
use mandir_checkout::application::flow::CheckoutFlow;
use mandir_checkout::config::CheckoutConfig;
use mandir_checkout::domain::ports::{OrderBackendBox, PaymentGatewayBox};
use mandir_checkout::domain::session::Step;
use mandir_checkout::infrastructure::http::HttpOrderBackend;
use mandir_checkout::infrastructure::page::LoggingChrome;
use mandir_checkout::infrastructure::simulated::{InMemoryOrderBackend, SimulatedGateway};
use mandir_checkout::interfaces::csv::event_reader::EventReader;
use mandir_checkout::text;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Secret shared by the simulated backend and gateway so rehearsed payments
/// pass signature verification.
const REHEARSAL_SECRET: &str = "mandir_rehearsal_secret";

/// Replays a scripted donation checkout session.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Scripted checkout events CSV file
    script: PathBuf,

    /// Base URL of a live order backend. If omitted, orders are issued and
    /// verified in memory.
    #[arg(long)]
    api_base: Option<String>,

    /// Make the simulated hosted checkout report a dismissal instead of a
    /// completed payment.
    #[arg(long)]
    dismiss: bool,

    /// Open the flow with this tier pre-selected.
    #[arg(long)]
    tier: Option<String>,

    /// Public key id handed to the hosted checkout.
    #[arg(long, env = "RAZORPAY_KEY_ID", default_value = "rzp_test_simulated")]
    key_id: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let backend: OrderBackendBox = match &cli.api_base {
        Some(base) => Box::new(HttpOrderBackend::new(base.clone())),
        None => Box::new(InMemoryOrderBackend::new(REHEARSAL_SECRET)),
    };
    let mut gateway = SimulatedGateway::new(REHEARSAL_SECRET);
    if cli.dismiss {
        gateway = gateway.with_dismissal();
    }
    let gateway: PaymentGatewayBox = Box::new(gateway);

    let mut flow = CheckoutFlow::open(
        CheckoutConfig::new(cli.key_id),
        backend,
        gateway,
        Arc::new(LoggingChrome),
        cli.tier.as_deref(),
    );

    let file = File::open(&cli.script).into_diagnostic()?;
    let reader = EventReader::new(file);
    for event in reader.events() {
        match event {
            Ok(event) => {
                if let Err(e) = flow.apply(event).await {
                    eprintln!("{}", e.user_message());
                }
            }
            Err(e) => {
                eprintln!("Error reading event: {}", e);
            }
        }
    }

    println!("step={:?}", flow.session().step());
    if let Ok(amount) = flow.session().charge_amount() {
        println!("amount={amount}");
    }
    if flow.session().step() == Step::Success {
        println!("{} {}", text::THANK_YOU, text::DONATION_RECEIVED);
    }

    Ok(())
}
