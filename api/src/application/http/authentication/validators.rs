use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterValidator {
    #[validate(email(message = "a valid email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginValidator {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileValidator {
    #[validate(length(min = 1, message = "firstName is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "lastName is required"))]
    pub last_name: String,

    #[serde(default)]
    pub current_password: Option<String>,

    #[serde(default)]
    pub new_password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotificationSettingsValidator {
    #[serde(default)]
    pub enabled: Option<bool>,

    #[serde(default)]
    pub urgent_days: Option<i32>,

    #[serde(default)]
    pub warning_days: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_malformed_email() {
        let payload = RegisterValidator {
            email: "not-an-email".to_string(),
            password: "hunter2".to_string(),
            first_name: None,
            last_name: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn login_requires_both_fields() {
        let payload = LoginValidator {
            email: "ada@example.com".to_string(),
            password: String::new(),
        };
        assert!(payload.validate().is_err());
    }
}
