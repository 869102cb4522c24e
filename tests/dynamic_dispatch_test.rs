use chronify::domain::notification::Notification;
use chronify::domain::ports::{LedgerBox, NotifierBox, TransactionWatcherBox, WalletSessionBox};
use chronify::domain::registration::{CallArg, ContractCall, TransactionEvent};
use chronify::infrastructure::in_memory::{InMemoryLedger, InMemoryNotifier, StaticWallet};
use std::sync::Arc;

#[tokio::test]
async fn test_ports_as_trait_objects() {
    let ledger = InMemoryLedger::confirming();
    let ledger_port: LedgerBox = Box::new(ledger.clone());
    let watcher_port: TransactionWatcherBox = Box::new(ledger.clone());
    let wallet_port: WalletSessionBox = Box::new(StaticWallet::connected(297));
    let notifier = InMemoryNotifier::new();
    let notifier_port: NotifierBox = Box::new(notifier.clone());

    let call = ContractCall {
        address: "0xabc".to_string(),
        function: "registerParty".to_string(),
        args: vec![CallArg::Text("Adams".to_string()), CallArg::Uint(2)],
    };

    // Verify Send + Sync by spawning tasks
    let submit_handle = tokio::spawn(async move {
        let tx = ledger_port.submit(&call).await.unwrap();
        let mut events = watcher_port.observe(&tx).await.unwrap();
        let mut seen = Vec::new();
        while let Some(event) = events.recv().await {
            seen.push(event);
        }
        seen
    });

    let wallet_handle = tokio::spawn(async move {
        (wallet_port.is_connected().await, wallet_port.chain_id().await)
    });

    let notify_handle = tokio::spawn(async move {
        notifier_port
            .notify("register", Notification::loading("Processing..."))
            .await;
    });

    let events = submit_handle.await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], TransactionEvent::Pending);
    assert!(matches!(events[1], TransactionEvent::Confirmed(_)));

    assert_eq!(wallet_handle.await.unwrap(), (true, Some(297)));

    notify_handle.await.unwrap();
    assert_eq!(
        notifier.current("register").await,
        Some(Notification::loading("Processing..."))
    );
}

#[tokio::test]
async fn test_flow_is_shareable_across_tasks() {
    use chronify::application::flow::{FlowPorts, RegistrationFlow};
    use chronify::config::FlowConfig;
    use chronify::infrastructure::in_memory::RecordingNavigator;

    let ledger = InMemoryLedger::confirming();
    let flow = Arc::new(RegistrationFlow::new(
        FlowConfig::default(),
        FlowPorts {
            wallet: Box::new(StaticWallet::connected(297)),
            ledger: Box::new(ledger.clone()),
            watcher: Box::new(ledger.clone()),
            notifier: Box::new(InMemoryNotifier::new()),
            navigator: Box::new(RecordingNavigator::new()),
        },
    ));

    // Racing submissions: the pending slot lets exactly one through.
    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let flow = Arc::clone(&flow);
            tokio::spawn(async move { flow.submit("Adams", "Retailer").await })
        })
        .collect();

    let mut accepted = 0;
    for task in tasks {
        if task.await.unwrap().is_ok() {
            accepted += 1;
        }
    }
    assert_eq!(accepted, 1);
    assert_eq!(ledger.calls().await.len(), 1);
}
