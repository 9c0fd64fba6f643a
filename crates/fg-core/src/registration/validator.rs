//! Draft validation.
//!
//! Pure well-formedness checks that run before any network call. Validation
//! is short-circuiting: rules are evaluated in a fixed order and the first
//! failure wins, so the result is always a single error kind.

use serde::Serialize;

use crate::registration::RegistrationDraft;

/// Characters accepted as the "special" password class.
const SPECIAL_CHARS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
pub enum ValidationError {
    #[error("Passwords do not match!")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("Password needs at least one uppercase letter")]
    PasswordMissingUppercase,
    #[error("Password needs at least one digit")]
    PasswordMissingDigit,
    #[error("Password needs at least one special character")]
    PasswordMissingSpecial,
    #[error("Please upload or capture an image!")]
    ImageRequired,
    #[error("First name is required")]
    FirstNameRequired,
    #[error("Last name is required")]
    LastNameRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
}

/// Pure draft validator: no side effects, no state.
pub struct Validator;

impl Validator {
    pub fn validate(draft: &RegistrationDraft) -> Result<(), ValidationError> {
        let password = draft.password.expose();

        if draft.password != draft.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::PasswordMissingUppercase);
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::PasswordMissingDigit);
        }
        if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
            return Err(ValidationError::PasswordMissingSpecial);
        }
        if draft.image_data.is_empty() {
            return Err(ValidationError::ImageRequired);
        }
        if draft.first_name.trim().is_empty() {
            return Err(ValidationError::FirstNameRequired);
        }
        if draft.last_name.trim().is_empty() {
            return Err(ValidationError::LastNameRequired);
        }
        if !email_shape_ok(&draft.email) {
            return Err(ValidationError::EmailInvalid);
        }
        Ok(())
    }
}

/// Basic `local@domain.tld` shape check. The backend performs the
/// authoritative validation; this only blocks obviously malformed input.
fn email_shape_ok(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
