//! Credential Outcomes
//!
//! Rejected credentials are ordinary results, not errors. A rejection names
//! the offending field so clients can attach the message to the right input.

use crate::domain::entity::User;

/// A field-level rejection.
///
/// Both sides are static: the set of rejections is fixed and the messages
/// are part of the API contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Outcome of a register or login attempt.
#[derive(Debug, Clone)]
pub enum CredentialOutcome {
    /// Credentials accepted; a session has been bound to the user.
    Accepted {
        user: User,
        session_token: String,
    },
    /// Credentials rejected. No user state was touched.
    Rejected(Vec<FieldError>),
}

impl CredentialOutcome {
    /// Single-field rejection, the common case.
    pub fn rejected(field: &'static str, message: &'static str) -> Self {
        Self::Rejected(vec![FieldError { field, message }])
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
