//! `saucedemo-keywords` — test-facing data access keywords.
//!
//! Adapts the fixture store to the calling convention a test harness
//! expects: named operations, soft misses as `None`, and explicit
//! pass/fail checks for the operations whose contract requires existence.

pub mod check;
pub mod keywords;

pub use check::{CheckError, CheckResult};
pub use keywords::TestDataKeywords;
