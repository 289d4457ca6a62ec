//! Login payload shape for the identity boundary.
//!
//! Token issuance is handled outside this core, but the login payload shape is
//! part of the boundary contract: a client identifies itself with either an
//! email address or a phone number, never both. The dynamic union from the
//! wire is resolved into a tagged `LoginIdentity` variant, with violations
//! collected as per-field validation errors.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// Raw login payload as received from the wire.
///
/// `email` and `phone` are mutually exclusive; exactly one must be present.
/// Use [`LoginDto::identity`] to resolve the union into a tagged variant.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginDto {
    #[validate(email(message = "Email isn't valid"))]
    pub email: Option<String>,
    #[validate(length(min = 6, message = "Phone number isn't valid"))]
    pub phone: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Resolved login identity, exactly one of the two supported shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginIdentity {
    Email(String),
    Phone(String),
}

impl LoginDto {
    /// Resolves the email/phone union into a tagged identity.
    ///
    /// # Returns
    /// - `Ok(LoginIdentity)` - Exactly one identity shape was present
    /// - `Err(ValidationErrors)` - Both or neither were supplied; errors are
    ///   recorded against both fields
    pub fn identity(&self) -> Result<LoginIdentity, ValidationErrors> {
        match (self.email.as_deref(), self.phone.as_deref()) {
            (Some(email), None) => Ok(LoginIdentity::Email(email.to_string())),
            (None, Some(phone)) => Ok(LoginIdentity::Phone(phone.to_string())),
            (Some(_), Some(_)) => {
                let mut errors = ValidationErrors::new();
                let error = ValidationError::new("exclusive_identity").with_message(
                    Cow::from("Provide either an email or a phone number, not both"),
                );
                errors.add("email", error.clone());
                errors.add("phone", error);
                Err(errors)
            }
            (None, None) => {
                let mut errors = ValidationErrors::new();
                let error = ValidationError::new("missing_identity")
                    .with_message(Cow::from("Either an email or a phone number is required"));
                errors.add("email", error.clone());
                errors.add("phone", error);
                Err(errors)
            }
        }
    }
}
