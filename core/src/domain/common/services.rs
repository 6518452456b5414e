/// Aggregate service over the full port set. Each bounded context implements
/// its service trait on this type; see the `services.rs` of each domain module.
#[derive(Clone)]
pub struct Service<U, I, SR, H, TK, PL, RP, TR, HC> {
    pub(crate) user_repository: U,
    pub(crate) item_repository: I,
    pub(crate) saved_recipe_repository: SR,
    pub(crate) hasher_repository: H,
    pub(crate) token_provider: TK,
    pub(crate) product_lookup: PL,
    pub(crate) recipe_provider: RP,
    pub(crate) translation_provider: TR,
    pub(crate) health_check_repository: HC,
}

impl<U, I, SR, H, TK, PL, RP, TR, HC> Service<U, I, SR, H, TK, PL, RP, TR, HC> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        item_repository: I,
        saved_recipe_repository: SR,
        hasher_repository: H,
        token_provider: TK,
        product_lookup: PL,
        recipe_provider: RP,
        translation_provider: TR,
        health_check_repository: HC,
    ) -> Self {
        Self {
            user_repository,
            item_repository,
            saved_recipe_repository,
            hasher_repository,
            token_provider,
            product_lookup,
            recipe_provider,
            translation_provider,
            health_check_repository,
        }
    }
}
