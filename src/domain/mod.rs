//! Domain types for party registration and the ports through which the
//! registration flow reaches the wallet, the chain and the user.

pub mod form;
pub mod notification;
pub mod ports;
pub mod registration;
pub mod role;
