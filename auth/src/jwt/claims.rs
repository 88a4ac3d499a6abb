use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Identity token payload.
///
/// Carries a single claim: the subject, i.e. the id of the user the token
/// represents. No `exp`, `iat` or `jti` is set, so tokens stay valid until
/// the signing secret changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims identifying `subject`.
    pub fn for_subject(subject: impl ToString) -> Self {
        Self::new().with_subject(subject)
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Borrow the subject claim.
    ///
    /// # Errors
    /// * `MissingClaim` - `sub` is absent or empty
    pub fn subject(&self) -> Result<&str, JwtError> {
        match self.sub.as_deref() {
            Some(sub) if !sub.is_empty() => Ok(sub),
            _ => Err(JwtError::MissingClaim("sub".to_string())),
        }
    }
}
