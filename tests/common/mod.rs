#![allow(dead_code)]

use chronify::application::flow::{FlowPorts, RegistrationFlow};
use chronify::config::FlowConfig;
use chronify::infrastructure::in_memory::{
    InMemoryLedger, InMemoryNotifier, RecordingNavigator, StaticWallet,
};
use std::io::Write;
use tempfile::NamedTempFile;

/// A flow wired to in-memory adapters, with handles kept for assertions.
pub struct TestFlow {
    pub flow: RegistrationFlow,
    pub ledger: InMemoryLedger,
    pub notifier: InMemoryNotifier,
    pub navigator: RecordingNavigator,
}

pub fn build_flow(wallet: StaticWallet, ledger: InMemoryLedger) -> TestFlow {
    let notifier = InMemoryNotifier::new();
    let navigator = RecordingNavigator::new();
    let flow = RegistrationFlow::new(
        FlowConfig::default(),
        FlowPorts {
            wallet: Box::new(wallet),
            ledger: Box::new(ledger.clone()),
            watcher: Box::new(ledger.clone()),
            notifier: Box::new(notifier.clone()),
            navigator: Box::new(navigator.clone()),
        },
    );
    TestFlow {
        flow,
        ledger,
        notifier,
        navigator,
    }
}

/// A wallet connected to the chain the default config expects.
pub fn expected_wallet() -> StaticWallet {
    StaticWallet::connected(FlowConfig::default().network.chain_id)
}

pub fn write_csv(rows: &[(&str, &str)]) -> NamedTempFile {
    let mut csv = NamedTempFile::new().unwrap();
    writeln!(csv, "name, role").unwrap();
    for (name, role) in rows {
        writeln!(csv, "{}, {}", name, role).unwrap();
    }
    csv
}
