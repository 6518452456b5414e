use dispensa_core::domain::user::entities::{NotificationSettings, User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub mod handlers;
pub mod router;
pub mod validators;

/// User payload shared by every auth response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            display_name: user.display_name,
            photo_url: user.photo_url,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettingsResponse {
    pub enabled: bool,
    pub urgent_days: i32,
    pub warning_days: i32,
}

impl From<NotificationSettings> for NotificationSettingsResponse {
    fn from(settings: NotificationSettings) -> Self {
        Self {
            enabled: settings.enabled,
            urgent_days: settings.urgent_days,
            warning_days: settings.warning_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_serializes_camel_case() {
        let response = UserResponse {
            id: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
            display_name: None,
            photo_url: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("first_name").is_none());
    }
}
