use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    user::{
        entities::{NotificationSettings, User},
        value_objects::{UpdateNotificationSettingsInput, UpdateProfileInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn create_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn update_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;
}

pub trait UserService: Send + Sync {
    fn update_profile(
        &self,
        identity: Identity,
        input: UpdateProfileInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_notification_settings(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<NotificationSettings, CoreError>> + Send;

    fn update_notification_settings(
        &self,
        identity: Identity,
        input: UpdateNotificationSettingsInput,
    ) -> impl Future<Output = Result<NotificationSettings, CoreError>> + Send;
}
