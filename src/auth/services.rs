use lazy_static::lazy_static;
use regex::Regex;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::dto::{AuthRequest, ChangePasswordRequest, MessageResponse, TokenResponse};
use crate::auth::jwt::JwtKeys;
use crate::auth::password::{hash_password, verify_password};
use crate::error::ApiError;
use crate::users::repo::User;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if !is_valid_email(email) {
        return Err(ApiError::Validation("email must be an email".into()));
    }
    if password.is_empty() {
        return Err(ApiError::Validation("password should not be empty".into()));
    }
    Ok(())
}

/// Creates the account and signs the caller in with one call: a successful
/// signup returns a token for the new user.
pub async fn signup(db: &PgPool, keys: &JwtKeys, req: AuthRequest) -> Result<TokenResponse, ApiError> {
    let email = normalize_email(&req.email);
    validate_credentials(&email, &req.password)?;

    let hash = hash_password(&req.password)?;

    let user = match User::create(db, &email, &hash).await {
        Ok(user) => user,
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            // Generic on purpose: the caller is not told which field collided.
            warn!("signup unique violation");
            return Err(ApiError::CredentialsTaken);
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id = %user.id, "user signed up");
    sign_token(keys, user.id, &user.email)
}

/// Unknown email and wrong password take the same exit so responses carry
/// no enumeration signal.
pub async fn signin(db: &PgPool, keys: &JwtKeys, req: AuthRequest) -> Result<TokenResponse, ApiError> {
    let email = normalize_email(&req.email);
    validate_credentials(&email, &req.password)?;

    let user = User::find_by_email(db, &email)
        .await?
        .ok_or(ApiError::CredentialsIncorrect)?;

    if !verify_password(&req.password, &user.password_hash)? {
        warn!(user_id = %user.id, "signin password mismatch");
        return Err(ApiError::CredentialsIncorrect);
    }

    info!(user_id = %user.id, "user signed in");
    sign_token(keys, user.id, &user.email)
}

pub async fn change_password(
    db: &PgPool,
    user_id: Uuid,
    req: ChangePasswordRequest,
) -> Result<MessageResponse, ApiError> {
    if req.old_password.is_empty() {
        return Err(ApiError::Validation("oldPassword should not be empty".into()));
    }
    if req.new_password.len() < 3 || req.confirm_password.len() < 3 {
        return Err(ApiError::Validation(
            "newPassword must be longer than or equal to 3 characters".into(),
        ));
    }
    if req.new_password != req.confirm_password {
        return Err(ApiError::PasswordMismatch);
    }

    // The caller passed the access guard, so a missing row is an internal
    // consistency failure rather than user input error.
    let user = User::find_by_id(db, user_id)
        .await?
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("authenticated user {user_id} missing")))?;

    if !verify_password(&req.old_password, &user.password_hash)? {
        warn!(user_id = %user.id, "change password old password mismatch");
        return Err(ApiError::OldPasswordIncorrect);
    }

    let new_hash = hash_password(&req.new_password)?;
    User::update_password_hash(db, user.id, &new_hash).await?;

    info!(user_id = %user.id, "password changed");
    Ok(MessageResponse {
        message: "Password changed successfully".into(),
    })
}

fn sign_token(keys: &JwtKeys, user_id: Uuid, email: &str) -> Result<TokenResponse, ApiError> {
    let access_token = keys.sign(user_id, email)?;
    Ok(TokenResponse { access_token })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("a@test.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("spaces in@mail.com"));
    }

    #[test]
    fn emails_are_normalized() {
        assert_eq!(normalize_email("  A@Test.COM "), "a@test.com");
    }

    #[test]
    fn empty_password_is_a_validation_error() {
        let err = validate_credentials("a@test.com", "").unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
