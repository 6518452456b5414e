use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    jwt::{
        entities::{JwtClaims, TOKEN_TTL_DAYS},
        ports::TokenProvider,
    },
    user::entities::User,
};

/// HS256 token provider. Signs with a single shared secret, the way the
/// deployment has always worked.
#[derive(Debug, Clone)]
pub struct JwtTokenProvider {
    secret: String,
}

impl JwtTokenProvider {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }
}

impl TokenProvider for JwtTokenProvider {
    fn issue(&self, user: &User) -> Result<String, CoreError> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user.id,
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| {
            error!("Failed to sign token: {}", e);
            CoreError::InternalServerError
        })
    }

    fn verify(&self, token: &str) -> Result<JwtClaims, CoreError> {
        decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| CoreError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::entities::UserConfig;

    fn user() -> User {
        User::new(UserConfig {
            email: "ada@example.com".to_string(),
            password_hash: None,
            first_name: None,
            last_name: None,
            photo_url: None,
        })
    }

    #[test]
    fn issue_then_verify_round_trip() {
        let provider = JwtTokenProvider::new("test-secret".to_string());
        let user = user();

        let token = provider.issue(&user).unwrap();
        let claims = provider.verify(&token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let provider = JwtTokenProvider::new("test-secret".to_string());
        let other = JwtTokenProvider::new("other-secret".to_string());

        let token = other.issue(&user()).unwrap();
        assert_eq!(provider.verify(&token), Err(CoreError::InvalidToken));
    }

    #[test]
    fn garbage_is_rejected() {
        let provider = JwtTokenProvider::new("test-secret".to_string());
        assert_eq!(
            provider.verify("not-a-token"),
            Err(CoreError::InvalidToken)
        );
    }
}
