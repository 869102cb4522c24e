use chronify::application::flow::{FlowPorts, RegistrationFlow};
use chronify::config::FlowConfig;
use chronify::domain::registration::LedgerFailure;
use chronify::infrastructure::in_memory::{InMemoryLedger, StaticWallet};
use chronify::infrastructure::logging::{TracingNavigator, TracingNotifier};
use chronify::interfaces::csv::report_writer::{ReportRow, ReportWriter};
use chronify::interfaces::csv::request_reader::RequestReader;
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SimulatedOutcome {
    /// Every transaction is mined
    Confirm,
    /// Every transaction reverts
    Fail,
    /// Every call is refused by the wallet
    Reject,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file with `name, role` rows to register
    input: PathBuf,

    /// JSON flow configuration (network, contract address, routes)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Contract address, overrides the config file
    #[arg(long)]
    contract_address: Option<String>,

    /// Chain the simulated wallet is on. Defaults to the expected chain.
    #[arg(long)]
    chain_id: Option<u64>,

    /// Simulate a wallet that is not connected
    #[arg(long)]
    disconnected: bool,

    /// How the simulated ledger settles transactions
    #[arg(long, value_enum, default_value = "confirm")]
    outcome: SimulatedOutcome,

    /// Error reported by the simulated ledger for `fail` and `reject`
    #[arg(long, default_value = "execution reverted")]
    failure_message: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => FlowConfig::from_path(path).into_diagnostic()?,
        None => FlowConfig::default(),
    };
    if let Some(address) = cli.contract_address {
        config.contract_address = address;
    }

    let wallet = if cli.disconnected {
        StaticWallet::disconnected()
    } else {
        StaticWallet::connected(cli.chain_id.unwrap_or(config.network.chain_id))
    };
    let failure = LedgerFailure::new(cli.failure_message);
    let ledger = match cli.outcome {
        SimulatedOutcome::Confirm => InMemoryLedger::confirming(),
        SimulatedOutcome::Fail => InMemoryLedger::failing(failure),
        SimulatedOutcome::Reject => InMemoryLedger::rejecting(failure),
    };

    let routes = config.routes.clone();
    let flow = RegistrationFlow::new(
        config,
        FlowPorts {
            wallet: Box::new(wallet),
            ledger: Box::new(ledger.clone()),
            watcher: Box::new(ledger),
            notifier: Box::new(TracingNotifier::new()),
            navigator: Box::new(TracingNavigator),
        },
    );

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);
    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());

    // One registration at a time: each row settles before the next is sent.
    for row_result in reader.rows() {
        match row_result {
            Ok(row) => {
                let outcome = flow.register(&row.name, &row.role).await;
                writer
                    .write_row(&ReportRow::new(row, &outcome, &routes))
                    .into_diagnostic()?;
            }
            Err(e) => {
                eprintln!("Error reading registration: {}", e);
            }
        }
    }

    writer.finish().into_diagnostic()?;
    Ok(())
}
