use std::future::Future;

use crate::domain::{
    authentication::value_objects::{AuthOutput, Identity, LoginInput, RegisterInput},
    common::entities::app_errors::CoreError,
};

pub trait AuthService: Send + Sync {
    fn register(
        &self,
        input: RegisterInput,
    ) -> impl Future<Output = Result<AuthOutput, CoreError>> + Send;

    fn login(
        &self,
        input: LoginInput,
    ) -> impl Future<Output = Result<AuthOutput, CoreError>> + Send;

    /// Verifies a bearer token and resolves it to the owning user.
    fn authenticate(
        &self,
        token: String,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
