use super::notification::Notification;
use super::registration::{ContractCall, LedgerFailure, TransactionEvent, TxHandle};
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Sends contract writes to the chain.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Dispatches `call` and returns as soon as the transaction has a hash.
    async fn submit(&self, call: &ContractCall) -> Result<TxHandle, LedgerFailure>;
}

/// Follows a submitted transaction until it is mined or fails.
#[async_trait]
pub trait TransactionWatcher: Send + Sync {
    async fn observe(
        &self,
        handle: &TxHandle,
    ) -> Result<mpsc::Receiver<TransactionEvent>, LedgerFailure>;
}

/// The user's wallet connection.
#[async_trait]
pub trait WalletSession: Send + Sync {
    async fn is_connected(&self) -> bool;
    async fn chain_id(&self) -> Option<u64>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, key: &str, notification: Notification);
}

#[async_trait]
pub trait Navigator: Send + Sync {
    async fn push(&self, route: &str);
}

pub type LedgerBox = Box<dyn Ledger>;
pub type TransactionWatcherBox = Box<dyn TransactionWatcher>;
pub type WalletSessionBox = Box<dyn WalletSession>;
pub type NotifierBox = Box<dyn Notifier>;
pub type NavigatorBox = Box<dyn Navigator>;
