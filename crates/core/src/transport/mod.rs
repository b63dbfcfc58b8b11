//! Cargo and passenger transports.
//!
//! A transport is a common record plus a kind-specific payload. The rules in
//! [`rules`] decide whether a vehicle may carry a transport.

pub mod rules;
pub mod types;

pub use rules::{TransportRuleError, check_assignment};
pub use types::*;
