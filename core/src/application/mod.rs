use crate::domain::common::{DispensaConfig, services::Service};
use crate::infrastructure::{
    crypto::{argon2_hasher::Argon2HasherRepository, jwt::JwtTokenProvider},
    db::postgres::Postgres,
    health::repository::PostgresHealthCheckRepository,
    inventory::repositories::PostgresInventoryItemRepository,
    openfoodfacts::client::OpenFoodFactsClient,
    recipe::repositories::PostgresSavedRecipeRepository,
    spoonacular::client::SpoonacularClient,
    translation::client::HttpTranslationClient,
    user::repository::PostgresUserRepository,
};

pub type DispensaService = Service<
    PostgresUserRepository,
    PostgresInventoryItemRepository,
    PostgresSavedRecipeRepository,
    Argon2HasherRepository,
    JwtTokenProvider,
    OpenFoodFactsClient,
    SpoonacularClient,
    HttpTranslationClient,
    PostgresHealthCheckRepository,
>;

/// Wires the service aggregate against the given store handle. The handle's
/// lifecycle (open at startup, close at shutdown) stays with the caller.
pub fn create_service(config: &DispensaConfig, postgres: &Postgres) -> DispensaService {
    Service::new(
        PostgresUserRepository::new(postgres.get_db()),
        PostgresInventoryItemRepository::new(postgres.get_db()),
        PostgresSavedRecipeRepository::new(postgres.get_db()),
        Argon2HasherRepository::new(),
        JwtTokenProvider::new(config.auth.jwt_secret.clone()),
        OpenFoodFactsClient::new(config.product_lookup.base_url.clone()),
        SpoonacularClient::new(
            config.recipes.base_url.clone(),
            config.recipes.api_key.clone(),
        ),
        HttpTranslationClient::new(config.translation.cache_capacity),
        PostgresHealthCheckRepository::new(postgres.get_db()),
    )
}
