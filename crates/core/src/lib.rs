//! `saucedemo-core` — fixture data model for the SauceDemo test suite.
//!
//! This crate contains the **pure data** layer (no IO, no logging): the
//! fixture schema and its query surface.

pub mod error;
pub mod fixture;

pub use error::{DataError, DataResult};
pub use fixture::{Fixture, Product, UserExpectation, UNKNOWN};
