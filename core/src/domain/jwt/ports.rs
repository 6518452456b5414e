use crate::domain::{
    common::entities::app_errors::CoreError, jwt::entities::JwtClaims, user::entities::User,
};

#[cfg_attr(test, mockall::automock)]
pub trait TokenProvider: Send + Sync {
    /// Signs a token for the given user.
    fn issue(&self, user: &User) -> Result<String, CoreError>;

    /// Verifies signature and expiry, returning the embedded claims.
    fn verify(&self, token: &str) -> Result<JwtClaims, CoreError>;
}
