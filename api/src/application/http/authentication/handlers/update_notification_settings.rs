use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredUser,
    http::{
        authentication::{
            NotificationSettingsResponse, validators::UpdateNotificationSettingsValidator,
        },
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use dispensa_core::domain::user::{
    ports::UserService, value_objects::UpdateNotificationSettingsInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotificationSettingsResponse {
    pub notification_settings: NotificationSettingsResponse,
}

#[utoipa::path(
    put,
    path = "/auth/notifications",
    tag = "auth",
    summary = "Update notification settings",
    request_body = UpdateNotificationSettingsValidator,
    responses(
        (status = 200, body = UpdateNotificationSettingsResponse)
    )
)]
pub async fn update_notification_settings(
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
    ValidateJson(payload): ValidateJson<UpdateNotificationSettingsValidator>,
) -> Result<Response<UpdateNotificationSettingsResponse>, ApiError> {
    let settings = state
        .service
        .update_notification_settings(
            identity,
            UpdateNotificationSettingsInput {
                enabled: payload.enabled,
                urgent_days: payload.urgent_days,
                warning_days: payload.warning_days,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateNotificationSettingsResponse {
        notification_settings: NotificationSettingsResponse::from(settings),
    }))
}
