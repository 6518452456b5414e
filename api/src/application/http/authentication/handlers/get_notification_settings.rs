use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredUser,
    http::{
        authentication::NotificationSettingsResponse,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use dispensa_core::domain::user::ports::UserService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetNotificationSettingsResponse {
    pub notification_settings: NotificationSettingsResponse,
}

#[utoipa::path(
    get,
    path = "/auth/notifications",
    tag = "auth",
    summary = "Notification settings",
    responses(
        (status = 200, body = GetNotificationSettingsResponse)
    )
)]
pub async fn get_notification_settings(
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
) -> Result<Response<GetNotificationSettingsResponse>, ApiError> {
    let settings = state
        .service
        .get_notification_settings(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetNotificationSettingsResponse {
        notification_settings: NotificationSettingsResponse::from(settings),
    }))
}
