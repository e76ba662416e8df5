//! Login and registration inputs.

use crate::errors::AuthenticationError;

const MISSING_FIELDS: &str = "Please fill in all required fields";

/// An email-like and a password-like string.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Login address, matched case-insensitively
    pub email: String,
    /// Password, checked for length only
    pub password: String,
}

impl Credentials {
    /// Bundle login inputs.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Inputs for a new staff account.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registration {
    /// Full name
    pub name: String,
    /// Login address
    pub email: String,
    /// Password
    pub password: String,
    /// Department; `General` when empty
    pub department: String,
}

/// Shape rules for passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialPolicy {
    /// Minimum password length at login
    pub min_password_len: usize,
    /// Minimum password length at registration
    pub min_registration_password_len: usize,
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self {
            min_password_len: 3,
            min_registration_password_len: 6,
        }
    }
}

impl CredentialPolicy {
    /// Check login inputs: both present, password long enough.
    pub fn validate_login(&self, credentials: &Credentials) -> Result<(), AuthenticationError> {
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return Err(AuthenticationError::validation(MISSING_FIELDS));
        }
        check_length(&credentials.password, self.min_password_len)
    }

    /// Check registration inputs: name, email and password present, password
    /// long enough.
    pub fn validate_registration(
        &self,
        registration: &Registration,
    ) -> Result<(), AuthenticationError> {
        if registration.name.is_empty()
            || registration.email.is_empty()
            || registration.password.is_empty()
        {
            return Err(AuthenticationError::validation(MISSING_FIELDS));
        }
        check_length(&registration.password, self.min_registration_password_len)
    }
}

// Length in UTF-16 code units, as browser form validation counts it.
fn check_length(password: &str, min: usize) -> Result<(), AuthenticationError> {
    if password.encode_utf16().count() < min {
        return Err(AuthenticationError::validation(format!(
            "Password must be at least {min} characters"
        )));
    }
    Ok(())
}
