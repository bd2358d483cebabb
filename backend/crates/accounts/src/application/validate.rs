//! Form Validator
//!
//! Two rule sets, selected by action. LOGIN is pure and first-stop;
//! REGISTER runs every rule cumulatively and includes the two existence
//! queries against the identity host, so it is async and fallible only
//! in the transport sense - rule failures are data, not errors.

use crate::domain::gateway::{GatewayResult, IdentityGateway, IdentityKind};
use crate::domain::submission::RegisterSubmission;
use crate::domain::validation::{
    Field, MIN_PASSWORD_LENGTH, MSG_EMAIL_INVALID, MSG_EMAIL_REGISTERED, MSG_EMAIL_REQUIRED,
    MSG_PASSWORD_REQUIRED, MSG_PASSWORD_TOO_SHORT, MSG_PASSWORDS_DO_NOT_MATCH,
    MSG_USERNAME_REQUIRED, MSG_USERNAME_TAKEN, ValidationOutcome, is_valid_email,
};

pub use crate::domain::validation::validate_login;

/// REGISTER rules: every field evaluated, all errors surfaced together.
///
/// Ordering constraints that are part of the contract:
/// - the email existence query runs only for syntactically valid
///   addresses;
/// - the confirm-password comparison runs only when the length rule
///   passed, so a short password yields exactly one password error.
pub async fn validate_register<G>(
    gateway: &G,
    submission: &RegisterSubmission,
) -> GatewayResult<ValidationOutcome>
where
    G: IdentityGateway + Sync,
{
    let mut outcome = ValidationOutcome::default();

    let username = submission.username.trim();
    if username.is_empty() {
        outcome.reject(Field::Username, MSG_USERNAME_REQUIRED);
    } else if gateway.exists(IdentityKind::Username, username).await? {
        outcome.reject(Field::Username, MSG_USERNAME_TAKEN);
    } else {
        outcome.accept(Field::Username, username);
    }

    let email = submission.email.trim().to_lowercase();
    if email.is_empty() {
        outcome.reject(Field::Email, MSG_EMAIL_REQUIRED);
    } else if !is_valid_email(&email) {
        // Syntactically invalid addresses never reach the host
        outcome.reject(Field::Email, MSG_EMAIL_INVALID);
    } else if gateway.exists(IdentityKind::Email, &email).await? {
        outcome.reject(Field::Email, MSG_EMAIL_REGISTERED);
    } else {
        outcome.accept(Field::Email, email);
    }

    if submission.password.is_empty() {
        outcome.reject(Field::Password, MSG_PASSWORD_REQUIRED);
    } else if submission.password.chars().count() < MIN_PASSWORD_LENGTH {
        outcome.reject(Field::Password, MSG_PASSWORD_TOO_SHORT);
    } else if submission.password != submission.confirm_password {
        // Reached only when the length rule passed; a short password
        // suppresses the mismatch check entirely
        outcome.reject(Field::ConfirmPassword, MSG_PASSWORDS_DO_NOT_MATCH);
    }

    Ok(outcome)
}
