//! Business logic for user records resolved by the access boundary.

use tracing::debug;
use uuid::Uuid;

use shopbook_domain::{Ledger, User};

use crate::CoreError;

/// Provides validated mutations and lookups for [`User`] entities.
pub struct UserService;

impl UserService {
    /// Resolves the user for an identity-provider subject, creating the
    /// record on first sign-in. Returns the user id either way.
    pub fn ensure_user(
        ledger: &mut Ledger,
        subject: &str,
        email: &str,
        name: &str,
    ) -> Result<Uuid, CoreError> {
        if subject.trim().is_empty() {
            return Err(CoreError::Validation("subject must not be empty".into()));
        }
        if email.trim().is_empty() {
            return Err(CoreError::Validation("email must not be empty".into()));
        }
        if let Some(user) = ledger.user_by_subject(subject) {
            return Ok(user.id);
        }
        if ledger.user_by_email(email).is_some() {
            return Err(CoreError::Validation(format!(
                "email `{}` already belongs to another subject",
                email
            )));
        }
        debug!(subject, email, "creating user on first sign-in");
        Ok(ledger.add_user(User::new(subject, email, name)))
    }

    /// Looks up a user by email, the handle frontends address them by.
    pub fn by_email<'a>(ledger: &'a Ledger, email: &str) -> Result<&'a User, CoreError> {
        ledger
            .user_by_email(email)
            .ok_or_else(|| CoreError::UserNotFound(email.to_string()))
    }
}
