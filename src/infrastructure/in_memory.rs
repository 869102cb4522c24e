use crate::domain::notification::{Notification, NotificationBoard};
use crate::domain::ports::{Ledger, Navigator, Notifier, TransactionWatcher, WalletSession};
use crate::domain::registration::{
    ContractCall, LedgerFailure, Receipt, TransactionEvent, TxHandle,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{RwLock, mpsc};

#[derive(Debug, Clone)]
enum Script {
    Confirm,
    Fail(LedgerFailure),
    Reject(LedgerFailure),
    Unobservable(LedgerFailure),
    Events(Vec<TransactionEvent>),
}

/// A scripted ledger that records every call it receives.
///
/// It also acts as the transaction watcher: observing a handle replays the
/// events of its script. Clones share the same call log.
#[derive(Debug, Clone)]
pub struct InMemoryLedger {
    calls: Arc<RwLock<Vec<ContractCall>>>,
    script: Arc<Script>,
}

impl InMemoryLedger {
    fn with_script(script: Script) -> Self {
        Self {
            calls: Arc::default(),
            script: Arc::new(script),
        }
    }

    /// Every transaction goes pending, then gets mined.
    pub fn confirming() -> Self {
        Self::with_script(Script::Confirm)
    }

    /// Every transaction goes pending, then reverts with `failure`.
    pub fn failing(failure: LedgerFailure) -> Self {
        Self::with_script(Script::Fail(failure))
    }

    /// Every call is refused before a transaction exists.
    pub fn rejecting(failure: LedgerFailure) -> Self {
        Self::with_script(Script::Reject(failure))
    }

    /// Every call is accepted, but watching the transaction fails with `failure`.
    pub fn unobservable(failure: LedgerFailure) -> Self {
        Self::with_script(Script::Unobservable(failure))
    }

    /// Every observed transaction replays `events` as given.
    pub fn scripted(events: Vec<TransactionEvent>) -> Self {
        Self::with_script(Script::Events(events))
    }

    /// Every call submitted so far, oldest first.
    pub async fn calls(&self) -> Vec<ContractCall> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl Ledger for InMemoryLedger {
    async fn submit(&self, call: &ContractCall) -> Result<TxHandle, LedgerFailure> {
        let mut calls = self.calls.write().await;
        calls.push(call.clone());
        if let Script::Reject(failure) = self.script.as_ref() {
            return Err(failure.clone());
        }
        Ok(TxHandle(format!("0x{:064x}", calls.len())))
    }
}

#[async_trait]
impl TransactionWatcher for InMemoryLedger {
    async fn observe(
        &self,
        handle: &TxHandle,
    ) -> Result<mpsc::Receiver<TransactionEvent>, LedgerFailure> {
        let events = match self.script.as_ref() {
            Script::Confirm => vec![
                TransactionEvent::Pending,
                TransactionEvent::Confirmed(Receipt {
                    tx: handle.clone(),
                    block_number: Some(self.calls.read().await.len() as u64),
                }),
            ],
            Script::Fail(failure) => vec![
                TransactionEvent::Pending,
                TransactionEvent::Failed(failure.clone()),
            ],
            Script::Reject(failure) | Script::Unobservable(failure) => {
                return Err(failure.clone());
            }
            Script::Events(events) => events.clone(),
        };

        let (tx, rx) = mpsc::channel(events.len().max(1));
        for event in events {
            // The channel is sized for the whole script.
            let _ = tx.try_send(event);
        }
        Ok(rx)
    }
}

/// A wallet whose connection never changes.
#[derive(Debug, Clone, Copy)]
pub struct StaticWallet {
    connected: bool,
    chain_id: Option<u64>,
}

impl StaticWallet {
    /// Creates a wallet connected to `chain_id`.
    pub fn connected(chain_id: u64) -> Self {
        Self {
            connected: true,
            chain_id: Some(chain_id),
        }
    }

    /// Creates a wallet with no connection and no chain.
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            chain_id: None,
        }
    }
}

#[async_trait]
impl WalletSession for StaticWallet {
    async fn is_connected(&self) -> bool {
        self.connected
    }

    async fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }
}

/// Keeps the notifications on screen and every notification ever posted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotifier {
    board: Arc<RwLock<NotificationBoard>>,
    history: Arc<RwLock<Vec<(String, Notification)>>>,
}

impl InMemoryNotifier {
    /// Creates a new notifier with nothing on screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// The notification currently shown under `key`.
    pub async fn current(&self, key: &str) -> Option<Notification> {
        self.board.read().await.get(key).cloned()
    }

    /// Number of keys with a notification on screen.
    pub async fn active_count(&self) -> usize {
        self.board.read().await.len()
    }

    /// Every `(key, notification)` posted so far, oldest first.
    pub async fn history(&self) -> Vec<(String, Notification)> {
        self.history.read().await.clone()
    }
}

#[async_trait]
impl Notifier for InMemoryNotifier {
    async fn notify(&self, key: &str, notification: Notification) {
        self.history
            .write()
            .await
            .push((key.to_string(), notification.clone()));
        self.board.write().await.post(key, notification);
    }
}

/// Records the routes pushed to it instead of navigating.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<RwLock<Vec<String>>>,
}

impl RecordingNavigator {
    /// Creates a new navigator with no recorded routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every route pushed so far, oldest first.
    pub async fn routes(&self) -> Vec<String> {
        self.routes.read().await.clone()
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn push(&self, route: &str) {
        self.routes.write().await.push(route.to_string());
    }
}
