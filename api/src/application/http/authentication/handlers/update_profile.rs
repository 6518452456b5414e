use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredUser,
    http::{
        authentication::{UserResponse, validators::UpdateProfileValidator},
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use dispensa_core::domain::user::{ports::UserService, value_objects::UpdateProfileInput};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateProfileResponse {
    pub user: UserResponse,
}

#[utoipa::path(
    put,
    path = "/auth/profile",
    tag = "auth",
    summary = "Update profile",
    description = "Renames the account and optionally rotates the password.",
    request_body = UpdateProfileValidator,
    responses(
        (status = 200, body = UpdateProfileResponse),
        (status = 400, description = "Missing fields or password too short"),
        (status = 401, description = "Current password does not match")
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
    ValidateJson(payload): ValidateJson<UpdateProfileValidator>,
) -> Result<Response<UpdateProfileResponse>, ApiError> {
    let user = state
        .service
        .update_profile(
            identity,
            UpdateProfileInput {
                first_name: payload.first_name,
                last_name: payload.last_name,
                current_password: payload.current_password,
                new_password: payload.new_password,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateProfileResponse {
        user: UserResponse::from(user),
    }))
}
