use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    authentication::{UserResponse, validators::RegisterValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use dispensa_core::domain::authentication::{
    ports::AuthService, value_objects::RegisterInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RegisterResponse {
    pub user: UserResponse,
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    summary = "Register",
    description = "Creates an account from email and password and returns a signed token.",
    request_body = RegisterValidator,
    responses(
        (status = 201, body = RegisterResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterValidator>,
) -> Result<Response<RegisterResponse>, ApiError> {
    let output = state
        .service
        .register(RegisterInput {
            email: payload.email,
            password: payload.password,
            first_name: payload.first_name,
            last_name: payload.last_name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(RegisterResponse {
        user: UserResponse::from(output.user),
        token: output.token,
    }))
}
