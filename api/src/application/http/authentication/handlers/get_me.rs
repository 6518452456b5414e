use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredUser,
    http::{
        authentication::UserResponse,
        server::api_entities::{api_error::ApiError, response::Response},
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMeResponse {
    pub user: UserResponse,
}

#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    summary = "Current user",
    responses(
        (status = 200, body = GetMeResponse),
        (status = 401, description = "Missing token")
    )
)]
pub async fn get_me(
    RequiredUser(identity): RequiredUser,
) -> Result<Response<GetMeResponse>, ApiError> {
    Ok(Response::OK(GetMeResponse {
        user: UserResponse::from(identity.user),
    }))
}
