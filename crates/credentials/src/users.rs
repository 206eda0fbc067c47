//! Demo-site accounts and form-filling data.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Shared password for every demo account.
pub const PASSWORD: &str = "secret_sauce";

/// The demo site's built-in accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserKind {
    Standard,
    LockedOut,
    Problem,
    PerformanceGlitch,
    Error,
    Visual,
}

impl UserKind {
    pub const ALL: [UserKind; 6] = [
        UserKind::Standard,
        UserKind::LockedOut,
        UserKind::Problem,
        UserKind::PerformanceGlitch,
        UserKind::Error,
        UserKind::Visual,
    ];

    /// Login username, which is also the user-type key used by the fixture's
    /// expectation records.
    pub fn username(&self) -> &'static str {
        match self {
            UserKind::Standard => "standard_user",
            UserKind::LockedOut => "locked_out_user",
            UserKind::Problem => "problem_user",
            UserKind::PerformanceGlitch => "performance_glitch_user",
            UserKind::Error => "error_user",
            UserKind::Visual => "visual_user",
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username(),
            password: PASSWORD,
        }
    }

    /// `username:password` form used by data-driven login rows.
    pub fn login_pair(&self) -> String {
        format!("{}:{}", self.username(), PASSWORD)
    }
}

impl core::fmt::Display for UserKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.username())
    }
}

/// Username did not match any demo account.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown user: {0}")]
pub struct UnknownUserKind(pub String);

impl FromStr for UserKind {
    type Err = UnknownUserKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserKind::ALL
            .into_iter()
            .find(|kind| kind.username() == s)
            .ok_or_else(|| UnknownUserKind(s.to_string()))
    }
}

/// A username/password pair ready for the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: &'static str,
    pub password: &'static str,
}

/// Checkout information form entries used by happy-path tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckoutForm {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub postal_code: &'static str,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            first_name: "John",
            last_name: "Doe",
            postal_code: "12345",
        }
    }
}

/// Credit-card entries for payment-step tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreditCard {
    pub number: &'static str,
    pub expiry: &'static str,
    pub cvv: &'static str,
}

impl Default for CreditCard {
    fn default() -> Self {
        Self {
            number: "4111111111111111",
            expiry: "12/25",
            cvv: "123",
        }
    }
}
