use crate::domain::{
    authentication::{
        ports::AuthService,
        value_objects::{AuthOutput, Identity, LoginInput, RegisterInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    inventory::ports::InventoryItemRepository,
    jwt::ports::TokenProvider,
    product::ports::ProductLookup,
    recipe::ports::{RecipeProvider, SavedRecipeRepository},
    translation::ports::TranslationProvider,
    user::{
        entities::{User, UserConfig},
        ports::UserRepository,
    },
};

impl<U, I, SR, H, TK, PL, RP, TR, HC> AuthService for Service<U, I, SR, H, TK, PL, RP, TR, HC>
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
    async fn register(&self, input: RegisterInput) -> Result<AuthOutput, CoreError> {
        if input.email.is_empty() || input.password.is_empty() {
            return Err(CoreError::Validation(
                "email and password are required".to_string(),
            ));
        }

        let email = input.email.to_lowercase();

        if self.user_repository.get_by_email(email.clone()).await?.is_some() {
            return Err(CoreError::EmailAlreadyRegistered);
        }

        let password_hash = self.hasher_repository.hash_password(&input.password).await?;

        let user = User::new(UserConfig {
            email,
            password_hash: Some(password_hash),
            first_name: input.first_name,
            last_name: input.last_name,
            photo_url: None,
        });

        let user = self.user_repository.create_user(user).await?;
        let token = self.token_provider.issue(&user)?;

        tracing::info!(email = %user.email, "user registered");

        Ok(AuthOutput { user, token })
    }

    async fn login(&self, input: LoginInput) -> Result<AuthOutput, CoreError> {
        if input.email.is_empty() || input.password.is_empty() {
            return Err(CoreError::Validation(
                "email and password are required".to_string(),
            ));
        }

        let user = self
            .user_repository
            .get_by_email(input.email.to_lowercase())
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        // Accounts without a local password cannot log in this way.
        let hash = user
            .password_hash
            .as_deref()
            .ok_or(CoreError::InvalidCredentials)?;

        let valid = self
            .hasher_repository
            .verify_password(hash, &input.password)
            .await?;
        if !valid {
            return Err(CoreError::InvalidCredentials);
        }

        let token = self.token_provider.issue(&user)?;

        tracing::info!(email = %user.email, "user logged in");

        Ok(AuthOutput { user, token })
    }

    async fn authenticate(&self, token: String) -> Result<Identity, CoreError> {
        let claims = self.token_provider.verify(&token)?;

        let user = self
            .user_repository
            .get_by_id(claims.sub)
            .await?
            .ok_or(CoreError::InvalidToken)?;

        Ok(Identity::new(user))
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
        user::ports::MockUserRepository,
    };

    fn existing_user() -> User {
        User::new(UserConfig {
            email: "ada@example.com".to_string(),
            password_hash: Some("$argon2id$stored".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            photo_url: None,
        })
    }

    fn service(
        users: MockUserRepository,
        hasher: MockHasherRepository,
        tokens: MockTokenProvider,
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
            tokens,
            MockProductLookup::new(),
            MockRecipeProvider::new(),
            MockTranslationProvider::new(),
            MockHealthCheckRepository::new(),
        )
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(Some(existing_user())) }));
        let service = service(users, MockHasherRepository::new(), MockTokenProvider::new());

        let result = service
            .register(RegisterInput {
                email: "Ada@Example.com".to_string(),
                password: "hunter2".to_string(),
                first_name: None,
                last_name: None,
            })
            .await;

        assert!(matches!(result, Err(CoreError::EmailAlreadyRegistered)));
    }

    #[tokio::test]
    async fn register_hashes_and_issues_token() {
        let mut users = MockUserRepository::new();
        users.expect_get_by_email().returning(|_| Box::pin(async { Ok(None) }));
        users.expect_create_user().returning(|u| Box::pin(async move { Ok(u) }));

        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_hash_password()
            .returning(|_| Box::pin(async { Ok("$argon2id$fresh".to_string()) }));

        let mut tokens = MockTokenProvider::new();
        tokens.expect_issue().returning(|_| Ok("jwt".to_string()));

        let service = service(users, hasher, tokens);

        let output = service
            .register(RegisterInput {
                email: "Grace@Example.com".to_string(),
                password: "hopper".to_string(),
                first_name: Some("Grace".to_string()),
                last_name: Some("Hopper".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(output.user.email, "grace@example.com");
        assert_eq!(output.user.password_hash.as_deref(), Some("$argon2id$fresh"));
        assert_eq!(output.user.display_name.as_deref(), Some("Grace Hopper"));
        assert_eq!(output.token, "jwt");
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_invalid_credentials() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(Some(existing_user())) }));

        let mut hasher = MockHasherRepository::new();
        hasher.expect_verify_password().returning(|_, _| Box::pin(async { Ok(false) }));

        let service = service(users, hasher, MockTokenProvider::new());

        let result = service
            .login(LoginInput {
                email: "ada@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn login_with_unknown_email_is_invalid_credentials() {
        let mut users = MockUserRepository::new();
        users.expect_get_by_email().returning(|_| Box::pin(async { Ok(None) }));
        let service = service(users, MockHasherRepository::new(), MockTokenProvider::new());

        let result = service
            .login(LoginInput {
                email: "nobody@example.com".to_string(),
                password: "irrelevant".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn authenticate_resolves_claims_to_user() {
        let user = existing_user();
        let user_id = user.id;

        let mut tokens = MockTokenProvider::new();
        tokens.expect_verify().returning(move |_| {
            Ok(crate::domain::jwt::entities::JwtClaims {
                sub: user_id,
                email: "ada@example.com".to_string(),
                iat: 0,
                exp: i64::MAX,
            })
        });

        let mut users = MockUserRepository::new();
        let stored = user.clone();
        users
            .expect_get_by_id()
            .returning(move |_| Box::pin(async move { Ok(Some(stored.clone())) }));

        let service = service(users, MockHasherRepository::new(), tokens);

        let identity = service.authenticate("jwt".to_string()).await.unwrap();
        assert_eq!(identity.id(), user_id);
    }
}
