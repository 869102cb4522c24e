//! Application layer driving party registration.
//!
//! `RegistrationFlow` validates a registration, hands it to the ledger and
//! follows the resulting transaction, reporting every step through the
//! notifier and redirecting the user once the chain confirms it.

pub mod flow;
