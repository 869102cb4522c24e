use super::role::Role;
use crate::error::RegistrationError;
use std::fmt;

/// Name of the contract function that registers a party.
pub const REGISTER_FUNCTION: &str = "registerParty";

/// Message shown when the ledger gives us nothing more specific.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// A validated registration: the name is non-empty and the role is mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    name: String,
    role: Role,
}

impl RegistrationRequest {
    /// Builds a request from raw form input.
    ///
    /// Checks run in form order: missing name, missing role, then the role
    /// lookup. Only empty strings count as missing; the name is kept as typed.
    pub fn parse(name: &str, role_label: &str) -> Result<Self, RegistrationError> {
        if name.is_empty() {
            return Err(RegistrationError::MissingName);
        }
        if role_label.is_empty() {
            return Err(RegistrationError::MissingRole);
        }
        let role = Role::from_label(role_label)
            .ok_or_else(|| RegistrationError::UnknownRole(role_label.to_string()))?;

        Ok(Self {
            name: name.to_string(),
            role,
        })
    }

    /// The name exactly as entered.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The `registerParty(name, roleCode)` call for this request.
    pub fn to_call(&self, contract_address: &str) -> ContractCall {
        ContractCall {
            address: contract_address.to_string(),
            function: REGISTER_FUNCTION.to_string(),
            args: vec![
                CallArg::Text(self.name.clone()),
                CallArg::Uint(u64::from(self.role.code().0)),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArg {
    Text(String),
    Uint(u64),
}

/// A write against the supply-chain contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub address: String,
    pub function: String,
    pub args: Vec<CallArg>,
}

/// Hash of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxHandle(pub String);

impl fmt::Display for TxHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub tx: TxHandle,
    pub block_number: Option<u64>,
}

/// Error reported by the ledger, either when a call is refused or when a
/// mined transaction reverts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LedgerFailure {
    pub short_message: Option<String>,
    pub message: Option<String>,
}

impl LedgerFailure {
    /// Creates a failure carrying only the full error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            short_message: None,
            message: Some(message.into()),
        }
    }

    /// Adds the wallet's short, user-friendly message.
    pub fn with_short_message(mut self, short: impl Into<String>) -> Self {
        self.short_message = Some(short.into());
        self
    }

    /// The most specific non-empty message available.
    pub fn display_message(&self) -> String {
        [&self.short_message, &self.message]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
    }
}

/// What the transaction watcher reports about a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionEvent {
    Pending,
    Confirmed(Receipt),
    Failed(LedgerFailure),
}

/// Lifecycle of the single submission a flow tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionState {
    #[default]
    Idle,
    Pending,
    Confirmed,
    Failed,
}

impl TransactionState {
    /// A new submission may start from any state but `Pending`.
    pub fn accepts_submission(self) -> bool {
        self != Self::Pending
    }

    /// Next state after a watcher event. Only a pending submission moves.
    pub fn on_event(self, event: &TransactionEvent) -> Self {
        match (self, event) {
            (Self::Pending, TransactionEvent::Pending) => Self::Pending,
            (Self::Pending, TransactionEvent::Confirmed(_)) => Self::Confirmed,
            (Self::Pending, TransactionEvent::Failed(_)) => Self::Failed,
            (state, _) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_checks_name_before_role() {
        assert_eq!(
            RegistrationRequest::parse("", ""),
            Err(RegistrationError::MissingName)
        );
        assert_eq!(
            RegistrationRequest::parse("Adams", ""),
            Err(RegistrationError::MissingRole)
        );
        assert_eq!(
            RegistrationRequest::parse("Adams", "Farmer"),
            Err(RegistrationError::UnknownRole("Farmer".to_string()))
        );
    }

    #[test]
    fn test_whitespace_is_not_missing() {
        let request = RegistrationRequest::parse("   ", "Supplier").unwrap();
        assert_eq!(request.name(), "   ");

        assert_eq!(
            RegistrationRequest::parse("Adams", " "),
            Err(RegistrationError::UnknownRole(" ".to_string()))
        );
    }

    #[test]
    fn test_call_carries_name_and_role_code() {
        let request = RegistrationRequest::parse(" Adams ", "Retailer").unwrap();
        let call = request.to_call("0xabc");

        assert_eq!(call.address, "0xabc");
        assert_eq!(call.function, "registerParty");
        assert_eq!(
            call.args,
            vec![CallArg::Text(" Adams ".to_string()), CallArg::Uint(3)]
        );
    }

    #[test]
    fn test_failure_message_preference() {
        let failure = LedgerFailure::new("execution reverted: party exists")
            .with_short_message("Party already registered");
        assert_eq!(failure.display_message(), "Party already registered");

        let failure = LedgerFailure::new("execution reverted");
        assert_eq!(failure.display_message(), "execution reverted");

        let failure = LedgerFailure {
            short_message: Some(String::new()),
            message: None,
        };
        assert_eq!(failure.display_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_state_transitions() {
        let receipt = Receipt {
            tx: TxHandle("0x1".to_string()),
            block_number: Some(7),
        };
        let failed = TransactionEvent::Failed(LedgerFailure::default());
        let confirmed = TransactionEvent::Confirmed(receipt);

        let pending = TransactionState::Pending;
        assert_eq!(pending.on_event(&TransactionEvent::Pending), pending);
        assert_eq!(pending.on_event(&confirmed), TransactionState::Confirmed);
        assert_eq!(pending.on_event(&failed), TransactionState::Failed);

        // Events for nothing in flight are ignored.
        assert_eq!(
            TransactionState::Idle.on_event(&confirmed),
            TransactionState::Idle
        );
        assert_eq!(
            TransactionState::Confirmed.on_event(&failed),
            TransactionState::Confirmed
        );

        assert!(!pending.accepts_submission());
        assert!(TransactionState::Failed.accepts_submission());
    }
}
