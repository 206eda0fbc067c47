//! `saucedemo-fixtures` — fixture loading and lookup for the SauceDemo
//! test suite.
//!
//! The [`FixtureStore`] reads JSON fixture files from a data directory,
//! caches each file per store instance, and answers the product, scenario,
//! and user-expectation queries the test layers build on.

pub mod store;

pub use store::{FixtureStore, PRIMARY_FIXTURE};
