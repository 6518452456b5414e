use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Expiry thresholds used for reminder notifications. These are per-user
/// display preferences; the urgency status itself is derived from fixed
/// thresholds (see the inventory module).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NotificationSettings {
    pub enabled: bool,
    pub urgent_days: i32,
    pub warning_days: i32,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            urgent_days: 3,
            warning_days: 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// Argon2 hash. Absent for accounts created through an external identity
    /// provider.
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub notification_settings: NotificationSettings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserConfig {
    pub email: String,
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo_url: Option<String>,
}

impl User {
    pub fn new(config: UserConfig) -> Self {
        let (now, timestamp) = generate_timestamp();
        let display_name = build_display_name(
            config.first_name.as_deref(),
            config.last_name.as_deref(),
        );

        Self {
            id: Uuid::new_v7(timestamp),
            email: config.email.to_lowercase(),
            password_hash: config.password_hash,
            first_name: config.first_name,
            last_name: config.last_name,
            display_name,
            photo_url: config.photo_url,
            notification_settings: NotificationSettings::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn rename(&mut self, first_name: String, last_name: String) {
        let (now, _) = generate_timestamp();
        self.display_name = build_display_name(Some(&first_name), Some(&last_name));
        self.first_name = Some(first_name);
        self.last_name = Some(last_name);
        self.updated_at = now;
    }

    pub fn set_password_hash(&mut self, hash: String) {
        let (now, _) = generate_timestamp();
        self.password_hash = Some(hash);
        self.updated_at = now;
    }
}

pub fn build_display_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    match (first, last) {
        (Some(f), Some(l)) => Some(format!("{f} {l}")),
        (Some(f), None) => Some(f.to_string()),
        (None, Some(l)) => Some(l.to_string()),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_joins_both_parts() {
        assert_eq!(
            build_display_name(Some("Ada"), Some("Lovelace")),
            Some("Ada Lovelace".to_string())
        );
        assert_eq!(build_display_name(Some("Ada"), None), Some("Ada".to_string()));
        assert_eq!(build_display_name(None, None), None);
    }

    #[test]
    fn new_user_lowercases_email() {
        let user = User::new(UserConfig {
            email: "Ada@Example.COM".to_string(),
            password_hash: None,
            first_name: None,
            last_name: None,
            photo_url: None,
        });
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.notification_settings, NotificationSettings::default());
    }
}
