use crate::config::FlowConfig;
use crate::domain::form::RegistrationForm;
use crate::domain::notification::Notification;
use crate::domain::ports::{
    LedgerBox, NavigatorBox, NotifierBox, TransactionWatcherBox, WalletSessionBox,
};
use crate::domain::registration::{
    GENERIC_FAILURE_MESSAGE, Receipt, RegistrationRequest, TransactionEvent, TransactionState,
    TxHandle,
};
use crate::domain::role::{NavigationTarget, Role};
use crate::error::RegistrationError;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// The collaborators a [`RegistrationFlow`] talks to.
pub struct FlowPorts {
    pub wallet: WalletSessionBox,
    pub ledger: LedgerBox,
    pub watcher: TransactionWatcherBox,
    pub notifier: NotifierBox,
    pub navigator: NavigatorBox,
}

/// How a registration attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Confirmed {
        receipt: Receipt,
        target: Option<NavigationTarget>,
    },
    Rejected(RegistrationError),
}

#[derive(Debug, Default)]
struct Slot {
    state: TransactionState,
    role: Option<Role>,
    /// Set once the ledger accepts the pending submission.
    handle: Option<TxHandle>,
}

/// Registers a party on the supply-chain contract and follows the
/// transaction to its end.
///
/// A flow tracks a single submission at a time: while one is pending,
/// further submissions are refused without reaching the ledger.
pub struct RegistrationFlow {
    config: FlowConfig,
    ports: FlowPorts,
    slot: Mutex<Slot>,
}

impl RegistrationFlow {
    /// Creates an idle flow talking to `ports`.
    pub fn new(config: FlowConfig, ports: FlowPorts) -> Self {
        Self {
            config,
            ports,
            slot: Mutex::new(Slot::default()),
        }
    }

    /// Current lifecycle state of the tracked submission.
    pub async fn state(&self) -> TransactionState {
        self.slot.lock().await.state
    }

    /// The role captured at submission, kept until the transaction settles.
    pub async fn pending_role(&self) -> Option<Role> {
        self.slot.lock().await.role
    }

    /// False while a submission is pending.
    pub async fn can_submit(&self) -> bool {
        self.state().await.accepts_submission()
    }

    /// Whether the submit button for `form` should be live.
    pub async fn submit_enabled(&self, form: &RegistrationForm) -> bool {
        form.submit_enabled(!self.can_submit().await)
    }

    /// Submits a registration to the ledger after checking preconditions.
    ///
    /// While a submission is pending nothing is checked or posted, as if the
    /// submit button were disabled. Otherwise checks run in order: wallet
    /// connection, network, name, role. Each failure is posted as a
    /// notification, except for roles that do not map to a contract code,
    /// which are dropped silently.
    pub async fn submit(
        &self,
        name: &str,
        role_label: &str,
    ) -> Result<TxHandle, RegistrationError> {
        if !self.can_submit().await {
            warn!("registration submitted while another is pending");
            return Err(RegistrationError::SubmissionInFlight);
        }

        let request = match self.validate(name, role_label).await {
            Ok(request) => request,
            Err(e) => {
                if e.is_user_facing() {
                    self.notify(Notification::error(e.to_string())).await;
                }
                debug!(error = %e, "registration refused before submission");
                return Err(e);
            }
        };

        {
            let mut slot = self.slot.lock().await;
            if !slot.state.accepts_submission() {
                warn!("registration submitted while another is pending");
                return Err(RegistrationError::SubmissionInFlight);
            }
            slot.state = TransactionState::Pending;
            slot.role = Some(request.role());
            slot.handle = None;
        }

        let call = request.to_call(&self.config.contract_address);
        info!(
            party = request.name(),
            role = %request.role(),
            contract = %call.address,
            "submitting registration"
        );

        match self.ports.ledger.submit(&call).await {
            Ok(handle) => {
                debug!(tx = %handle, "registration accepted by ledger");
                self.slot.lock().await.handle = Some(handle.clone());
                Ok(handle)
            }
            Err(failure) => {
                let message = failure.display_message();
                self.settle(TransactionState::Failed).await;
                warn!(%message, "ledger refused registration");
                self.notify(Notification::error(message.clone())).await;
                Err(RegistrationError::SubmissionRejected(message))
            }
        }
    }

    /// Follows `handle` until the transaction is confirmed or fails.
    ///
    /// Only the handle returned by the pending submission is accepted.
    pub async fn track(&self, handle: &TxHandle) -> Result<Outcome, RegistrationError> {
        {
            let slot = self.slot.lock().await;
            if slot.state != TransactionState::Pending || slot.handle.as_ref() != Some(handle) {
                return Err(RegistrationError::NoPendingSubmission);
            }
        }

        let mut events = match self.ports.watcher.observe(handle).await {
            Ok(events) => events,
            Err(failure) => return Err(self.fail(failure.display_message()).await),
        };

        while let Some(event) = events.recv().await {
            let next = self.state().await.on_event(&event);
            match event {
                TransactionEvent::Pending => {
                    debug!(tx = %handle, "registration pending");
                    self.notify(Notification::loading("Processing...")).await;
                }
                TransactionEvent::Confirmed(receipt) if next == TransactionState::Confirmed => {
                    return Ok(self.confirm(receipt).await);
                }
                TransactionEvent::Failed(failure) if next == TransactionState::Failed => {
                    return Err(self.fail(failure.display_message()).await);
                }
                _ => {}
            }
        }

        warn!(tx = %handle, "transaction watch ended without a result");
        Err(self.fail(GENERIC_FAILURE_MESSAGE.to_string()).await)
    }

    /// Submits and tracks a registration. Every failure is folded into
    /// [`Outcome::Rejected`].
    pub async fn register(&self, name: &str, role_label: &str) -> Outcome {
        let handle = match self.submit(name, role_label).await {
            Ok(handle) => handle,
            Err(e) => return Outcome::Rejected(e),
        };
        match self.track(&handle).await {
            Ok(outcome) => outcome,
            Err(e) => Outcome::Rejected(e),
        }
    }

    async fn validate(
        &self,
        name: &str,
        role_label: &str,
    ) -> Result<RegistrationRequest, RegistrationError> {
        if !self.ports.wallet.is_connected().await {
            return Err(RegistrationError::NotConnected);
        }

        let expected = self.config.network.chain_id;
        let actual = self.ports.wallet.chain_id().await;
        if actual != Some(expected) {
            return Err(RegistrationError::WrongNetwork {
                network: self.config.network.name.clone(),
                expected,
                actual,
            });
        }

        RegistrationRequest::parse(name, role_label)
    }

    async fn confirm(&self, receipt: Receipt) -> Outcome {
        let role = self.settle(TransactionState::Confirmed).await;
        info!(tx = %receipt.tx, block = ?receipt.block_number, "registration confirmed");
        self.notify(Notification::success("Registration successful")).await;

        let target = role.map(|role| role.landing());
        if let Some(target) = target {
            let route = self.config.routes.route_for(target);
            debug!(route, "redirecting after registration");
            self.ports.navigator.push(route).await;
        }

        Outcome::Confirmed { receipt, target }
    }

    async fn fail(&self, message: String) -> RegistrationError {
        self.settle(TransactionState::Failed).await;
        warn!(%message, "registration transaction failed");
        self.notify(Notification::error(message.clone())).await;
        RegistrationError::TransactionFailed(message)
    }

    /// Moves to a terminal state and releases the captured role.
    async fn settle(&self, state: TransactionState) -> Option<Role> {
        let mut slot = self.slot.lock().await;
        slot.state = state;
        slot.handle = None;
        slot.role.take()
    }

    async fn notify(&self, notification: Notification) {
        self.ports
            .notifier
            .notify(&self.config.notification_key, notification)
            .await;
    }
}
