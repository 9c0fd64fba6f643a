use serde::Serialize;

/// Identity of a freshly committed account.
///
/// The backend acknowledges a successful registration with an empty body, so
/// the identity is the email the enrollment was performed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredAccount {
    pub email: String,
}

impl RegisteredAccount {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}
