//! `saucedemo-credentials` — static login profiles and expected UI messages.
//!
//! This crate is consumed directly by test scripts; the fixture store knows
//! nothing about credentials. All values mirror the demo site's built-in
//! accounts.

pub mod messages;
pub mod users;

pub use messages::{CheckoutMessage, LoginMessage};
pub use users::{CheckoutForm, CreditCard, Credentials, UnknownUserKind, UserKind, PASSWORD};
