use serde::{Deserialize, Serialize};

/// Request body for both signup and signin.
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Issued on signup and signin.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_password_body_uses_camel_case() {
        let body: ChangePasswordRequest = serde_json::from_value(serde_json::json!({
            "oldPassword": "old",
            "newPassword": "new",
            "confirmPassword": "new",
        }))
        .unwrap();
        assert_eq!(body.old_password, "old");
        assert_eq!(body.new_password, "new");
        assert_eq!(body.confirm_password, "new");
    }
}
