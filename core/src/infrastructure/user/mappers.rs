use crate::domain::user::entities::{NotificationSettings, User};
use crate::entity::users::Model as UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            first_name: model.first_name,
            last_name: model.last_name,
            display_name: model.display_name,
            photo_url: model.photo_url,
            notification_settings: NotificationSettings {
                enabled: model.notifications_enabled,
                urgent_days: model.urgent_days,
                warning_days: model.warning_days,
            },
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}
