use std::time::Duration;

use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::{config::JwtConfig, state::AppState};

/// JWT payload. `sub` carries the user id, `email` rides along so handlers
/// can log an identity without a lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
    pub iss: String,
    pub aud: String,
}

/// HS256 signing and verification keys derived from `JwtConfig`.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub issuer: String,
    pub audience: String,
    pub ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            secret,
            issuer,
            audience,
            ttl_minutes,
        } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
            audience,
            ttl: Duration::from_secs((ttl_minutes as u64) * 60),
        }
    }
}

impl JwtKeys {
    /// Signs an access token expiring `ttl` from now.
    pub fn sign(&self, user_id: Uuid, email: &str) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %user_id, "jwt signed");
        Ok(token)
    }

    /// Checks signature, issuer, audience and expiry. Leeway is zero so the
    /// configured lifetime is an exact boundary.
    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        validation.set_audience(std::slice::from_ref(&self.audience));
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(user_id = %data.claims.sub, "jwt verified");
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys() -> JwtKeys {
        JwtKeys::from_ref(&AppState::fake())
    }

    /// Encodes claims with an arbitrary exp, bypassing `sign`, to exercise
    /// the expiry boundary without sleeping.
    fn token_with_exp(keys: &JwtKeys, offset_secs: i64) -> String {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "a@test.com".into(),
            iat: (now - 900 + offset_secs) as usize,
            exp: (now + offset_secs) as usize,
            iss: keys.issuer.clone(),
            aud: keys.audience.clone(),
        };
        encode(&Header::default(), &claims, &keys.encoding).expect("encode")
    }

    #[tokio::test]
    async fn sign_and_verify_roundtrip() {
        let keys = make_keys();
        let user_id = Uuid::new_v4();
        let token = keys.sign(user_id, "a@test.com").expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "a@test.com");
        assert_eq!(claims.iss, "test-issuer");
        assert_eq!(claims.aud, "test-aud");
    }

    #[tokio::test]
    async fn fresh_token_expires_ttl_from_issuance() {
        let keys = make_keys();
        let before = OffsetDateTime::now_utc().unix_timestamp() as usize;
        let token = keys.sign(Uuid::new_v4(), "a@test.com").expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert!(claims.exp >= before + 15 * 60);
        assert!(claims.exp <= claims.iat + 15 * 60);
    }

    #[tokio::test]
    async fn token_valid_just_before_expiry() {
        let keys = make_keys();
        let token = token_with_exp(&keys, 5);
        assert!(keys.verify(&token).is_ok());
    }

    #[tokio::test]
    async fn token_invalid_after_expiry() {
        let keys = make_keys();
        let token = token_with_exp(&keys, -1);
        assert!(keys.verify(&token).is_err());
    }

    #[tokio::test]
    async fn verify_rejects_other_secret() {
        let keys = make_keys();
        let other = {
            let mut k = make_keys();
            k.decoding = DecodingKey::from_secret(b"another-secret");
            k
        };
        let token = keys.sign(Uuid::new_v4(), "a@test.com").expect("sign");
        assert!(other.verify(&token).is_err());
    }

    #[tokio::test]
    async fn verify_rejects_garbage() {
        let keys = make_keys();
        assert!(keys.verify("not-a-jwt").is_err());
    }
}
