use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    inventory::ports::InventoryItemRepository,
    jwt::ports::TokenProvider,
    product::ports::ProductLookup,
    recipe::ports::{RecipeProvider, SavedRecipeRepository},
    translation::ports::TranslationProvider,
    user::{
        entities::{NotificationSettings, User},
        ports::{UserRepository, UserService},
        value_objects::{UpdateNotificationSettingsInput, UpdateProfileInput},
    },
};

const MIN_PASSWORD_LENGTH: usize = 6;

impl<U, I, SR, H, TK, PL, RP, TR, HC> UserService for Service<U, I, SR, H, TK, PL, RP, TR, HC>
where
    U: UserRepository,
    I: InventoryItemRepository,
    SR: SavedRecipeRepository,
    H: HasherRepository,
    TK: TokenProvider,
    PL: ProductLookup,
    RP: RecipeProvider,
    TR: TranslationProvider,
    HC: HealthCheckRepository,
{
    async fn update_profile(
        &self,
        identity: Identity,
        input: UpdateProfileInput,
    ) -> Result<User, CoreError> {
        if input.first_name.is_empty() || input.last_name.is_empty() {
            return Err(CoreError::Validation(
                "first name and last name are required".to_string(),
            ));
        }

        let mut user = identity.user;
        user.rename(input.first_name, input.last_name);

        if let (Some(current), Some(new)) = (input.current_password, input.new_password) {
            let hash = user.password_hash.as_deref().ok_or_else(|| {
                CoreError::Validation(
                    "this account has no password to change".to_string(),
                )
            })?;

            let valid = self.hasher_repository.verify_password(hash, &current).await?;
            if !valid {
                return Err(CoreError::InvalidCredentials);
            }

            if new.len() < MIN_PASSWORD_LENGTH {
                return Err(CoreError::Validation(format!(
                    "the new password must be at least {MIN_PASSWORD_LENGTH} characters"
                )));
            }

            let new_hash = self.hasher_repository.hash_password(&new).await?;
            user.set_password_hash(new_hash);
        }

        let updated = self.user_repository.update_user(user).await?;

        tracing::info!(email = %updated.email, "profile updated");

        Ok(updated)
    }

    async fn get_notification_settings(
        &self,
        identity: Identity,
    ) -> Result<NotificationSettings, CoreError> {
        Ok(identity.user.notification_settings)
    }

    async fn update_notification_settings(
        &self,
        identity: Identity,
        input: UpdateNotificationSettingsInput,
    ) -> Result<NotificationSettings, CoreError> {
        let mut user = identity.user;

        if let Some(enabled) = input.enabled {
            user.notification_settings.enabled = enabled;
        }
        // Day thresholds only apply when positive; zero or negative values
        // are silently ignored rather than rejected.
        if let Some(urgent_days) = input.urgent_days
            && urgent_days > 0
        {
            user.notification_settings.urgent_days = urgent_days;
        }
        if let Some(warning_days) = input.warning_days
            && warning_days > 0
        {
            user.notification_settings.warning_days = warning_days;
        }

        let updated = self.user_repository.update_user(user).await?;

        Ok(updated.notification_settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        crypto::ports::MockHasherRepository,
        health::ports::MockHealthCheckRepository,
        inventory::ports::MockInventoryItemRepository,
        jwt::ports::MockTokenProvider,
        product::ports::MockProductLookup,
        recipe::ports::{MockRecipeProvider, MockSavedRecipeRepository},
        translation::ports::MockTranslationProvider,
        user::entities::UserConfig,
        user::ports::MockUserRepository,
    };

    fn identity() -> Identity {
        Identity::new(User::new(UserConfig {
            email: "ada@example.com".to_string(),
            password_hash: Some("$argon2id$stored".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            photo_url: None,
        }))
    }

    fn service(
        users: MockUserRepository,
        hasher: MockHasherRepository,
    ) -> Service<
        MockUserRepository,
        MockInventoryItemRepository,
        MockSavedRecipeRepository,
        MockHasherRepository,
        MockTokenProvider,
        MockProductLookup,
        MockRecipeProvider,
        MockTranslationProvider,
        MockHealthCheckRepository,
    > {
        Service::new(
            users,
            MockInventoryItemRepository::new(),
            MockSavedRecipeRepository::new(),
            hasher,
            MockTokenProvider::new(),
            MockProductLookup::new(),
            MockRecipeProvider::new(),
            MockTranslationProvider::new(),
            MockHealthCheckRepository::new(),
        )
    }

    #[tokio::test]
    async fn short_new_password_is_rejected() {
        let mut hasher = MockHasherRepository::new();
        hasher.expect_verify_password().returning(|_, _| Box::pin(async { Ok(true) }));
        let service = service(MockUserRepository::new(), hasher);

        let result = service
            .update_profile(
                identity(),
                UpdateProfileInput {
                    first_name: "Ada".to_string(),
                    last_name: "Lovelace".to_string(),
                    current_password: Some("hunter2".to_string()),
                    new_password: Some("tiny".to_string()),
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn wrong_current_password_is_rejected() {
        let mut hasher = MockHasherRepository::new();
        hasher.expect_verify_password().returning(|_, _| Box::pin(async { Ok(false) }));
        let service = service(MockUserRepository::new(), hasher);

        let result = service
            .update_profile(
                identity(),
                UpdateProfileInput {
                    first_name: "Ada".to_string(),
                    last_name: "Lovelace".to_string(),
                    current_password: Some("wrong".to_string()),
                    new_password: Some("long enough".to_string()),
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn non_positive_thresholds_are_ignored() {
        let mut users = MockUserRepository::new();
        users.expect_update_user().returning(|u| Box::pin(async move { Ok(u) }));
        let service = service(users, MockHasherRepository::new());

        let settings = service
            .update_notification_settings(
                identity(),
                UpdateNotificationSettingsInput {
                    enabled: Some(false),
                    urgent_days: Some(0),
                    warning_days: Some(-2),
                },
            )
            .await
            .unwrap();

        assert!(!settings.enabled);
        assert_eq!(settings.urgent_days, 3);
        assert_eq!(settings.warning_days, 7);
    }
}
