//! Hard-check failures surfaced to the test harness.

use thiserror::Error;

/// Result of a pass/fail keyword.
pub type CheckResult = Result<(), CheckError>;

/// A keyword-level check that failed.
///
/// Soft lookups return `Option`; these are the deliberate escalations where
/// the caller asked for pass/fail rather than data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// A check needed a product that the fixture does not declare.
    #[error("product not found: {0}")]
    ProductMissing(String),

    /// The product exists but sits in a different department.
    #[error("product '{name}' is in department '{actual}', expected '{expected}'")]
    DepartmentMismatch {
        name: String,
        actual: String,
        expected: String,
    },

    /// No expectation record exists for the user type.
    #[error("no expectations defined for user: {0}")]
    ExpectationsMissing(String),

    /// The expectation record says this user cannot check out.
    #[error("user '{0}' is not expected to be able to checkout")]
    CheckoutNotAllowed(String),
}
