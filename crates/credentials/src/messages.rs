//! Expected UI error strings, verbatim as the site renders them.

/// Login-form failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginMessage {
    EmptyUsername,
    EmptyPassword,
    InvalidCredentials,
    LockedOut,
}

impl LoginMessage {
    pub fn text(&self) -> &'static str {
        match self {
            LoginMessage::EmptyUsername => "Epic sadface: Username is required",
            LoginMessage::EmptyPassword => "Epic sadface: Password is required",
            LoginMessage::InvalidCredentials => {
                "Epic sadface: Username and password do not match any user in this service"
            }
            LoginMessage::LockedOut => "Epic sadface: Sorry, this user has been locked out.",
        }
    }
}

/// Checkout-form validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutMessage {
    EmptyFirstName,
    EmptyLastName,
    EmptyPostalCode,
}

impl CheckoutMessage {
    pub fn text(&self) -> &'static str {
        match self {
            CheckoutMessage::EmptyFirstName => "Error: First Name is required",
            CheckoutMessage::EmptyLastName => "Error: Last Name is required",
            CheckoutMessage::EmptyPostalCode => "Error: Postal Code is required",
        }
    }
}
