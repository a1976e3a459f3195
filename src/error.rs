use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Request-terminal error taxonomy. Credential rejections deliberately share
/// fixed, generic messages so a caller cannot tell which field was wrong.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthenticated(String),

    #[error("Credentials taken")]
    CredentialsTaken,

    #[error("Credentials incorrect")]
    CredentialsIncorrect,

    #[error("New password and confirm password do not match")]
    PasswordMismatch,

    #[error("Old password incorrect")]
    OldPasswordIncorrect,

    #[error("Access to resources denied")]
    AccessDenied,

    #[error("Internal server error")]
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::CredentialsTaken
            | ApiError::CredentialsIncorrect
            | ApiError::PasswordMismatch
            | ApiError::OldPasswordIncorrect
            | ApiError::AccessDenied => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Internal(e.into())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Internal(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref source) = self {
            error!(error = %source, "internal error");
        }
        let status = self.status_code();
        let body = json!({
            "statusCode": status.as_u16(),
            "message": self.to_string(),
            "error": status.canonical_reason().unwrap_or("Unknown"),
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            ApiError::Validation("email must be an email".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthenticated("missing Authorization header".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::CredentialsTaken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::AccessDenied.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn credentials_incorrect_is_indistinguishable() {
        // Unknown email and wrong password surface through the same variant,
        // so their messages are identical by construction.
        let unknown_email = ApiError::CredentialsIncorrect;
        let wrong_password = ApiError::CredentialsIncorrect;
        assert_eq!(unknown_email.to_string(), wrong_password.to_string());
        assert_eq!(unknown_email.status_code(), wrong_password.status_code());
    }

    #[test]
    fn internal_message_is_redacted() {
        let err = ApiError::Internal(anyhow::anyhow!("connection refused to db at 10.0.0.1"));
        assert_eq!(err.to_string(), "Internal server error");
    }
}

/// `Json` wrapper whose rejection is [`ApiError::Validation`], so malformed
/// or missing request bodies answer 400 with the field detail instead of
/// axum's default 422.
pub struct ValidJson<T>(pub T);

#[axum::async_trait]
impl<S, T> axum::extract::FromRequest<S> for ValidJson<T>
where
    Json<T>: axum::extract::FromRequest<S, Rejection = axum::extract::rejection::JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;
        Ok(ValidJson(value))
    }
}
