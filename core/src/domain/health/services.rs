use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::{HealthCheckRepository, HealthCheckService},
    inventory::ports::InventoryItemRepository,
    jwt::ports::TokenProvider,
    product::ports::ProductLookup,
    recipe::ports::{RecipeProvider, SavedRecipeRepository},
    translation::ports::TranslationProvider,
    user::ports::UserRepository,
};

impl<U, I, SR, H, TK, PL, RP, TR, HC> HealthCheckService
    for Service<U, I, SR, H, TK, PL, RP, TR, HC>
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
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
