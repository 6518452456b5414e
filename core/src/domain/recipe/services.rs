use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    inventory::ports::InventoryItemRepository,
    jwt::ports::TokenProvider,
    product::ports::ProductLookup,
    recipe::{
        entities::{RecipeDetail, RecipeSummary, SaveRecipeOutcome, SavedRecipe, SavedRecipeConfig},
        ports::{RecipeProvider, RecipeService, SavedRecipeRepository},
        value_objects::{SaveRecipeInput, SuggestRecipesInput},
    },
    translation::ports::{TranslationProvider, TranslationService},
    user::ports::UserRepository,
};

impl<U, I, SR, H, TK, PL, RP, TR, HC> RecipeService for Service<U, I, SR, H, TK, PL, RP, TR, HC>
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
    async fn suggest_recipes(
        &self,
        input: SuggestRecipesInput,
    ) -> Result<Vec<RecipeSummary>, CoreError> {
        if input.ingredients.is_empty() {
            return Err(CoreError::Validation("ingredients are required".to_string()));
        }

        let mut recipes = self
            .recipe_provider
            .find_by_ingredients(&input.ingredients)
            .await?;

        tracing::info!(count = recipes.len(), "recipe suggestions fetched");

        // Localize titles and ingredient names before they reach the client.
        for recipe in &mut recipes {
            recipe.title = self.translate_to_italian(std::mem::take(&mut recipe.title)).await;
            recipe.used_ingredients =
                self.translate_all(std::mem::take(&mut recipe.used_ingredients)).await;
            recipe.missed_ingredients =
                self.translate_all(std::mem::take(&mut recipe.missed_ingredients)).await;
        }

        Ok(recipes)
    }

    async fn get_recipe_detail(&self, recipe_id: i64) -> Result<RecipeDetail, CoreError> {
        self.recipe_provider.get_information(recipe_id).await
    }

    async fn save_recipe(
        &self,
        identity: Identity,
        input: SaveRecipeInput,
    ) -> Result<SaveRecipeOutcome, CoreError> {
        if input.title.is_empty() {
            return Err(CoreError::Validation(
                "recipeId and title are required".to_string(),
            ));
        }

        let user_id = identity.id();

        if let Some(existing) = self
            .saved_recipe_repository
            .get_by_recipe_id(user_id, input.recipe_id)
            .await?
        {
            return Ok(SaveRecipeOutcome::AlreadySaved(existing));
        }

        let recipe = SavedRecipe::new(SavedRecipeConfig {
            user_id,
            recipe_id: input.recipe_id,
            title: input.title,
            image: input.image,
            servings: input.servings,
            ready_in_minutes: input.ready_in_minutes,
            source_url: input.source_url,
            summary: input.summary,
            instructions: input.instructions,
            ingredients: input.ingredients,
        });

        let created = self.saved_recipe_repository.insert(recipe).await?;

        tracing::info!(recipe_id = created.recipe_id, "recipe saved");

        Ok(SaveRecipeOutcome::Created(created))
    }

    async fn list_saved_recipes(&self, identity: Identity) -> Result<Vec<SavedRecipe>, CoreError> {
        self.saved_recipe_repository
            .list_by_owner(identity.id())
            .await
    }

    async fn delete_saved_recipe(
        &self,
        identity: Identity,
        recipe_id: i64,
    ) -> Result<SavedRecipe, CoreError> {
        self.saved_recipe_repository
            .delete(identity.id(), recipe_id)
            .await?
            .ok_or(CoreError::NotFound)
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
        user::entities::{User, UserConfig},
        user::ports::MockUserRepository,
    };

    fn identity() -> Identity {
        Identity::new(User::new(UserConfig {
            email: "ada@example.com".to_string(),
            password_hash: None,
            first_name: None,
            last_name: None,
            photo_url: None,
        }))
    }

    fn saved(user_id: uuid::Uuid, recipe_id: i64) -> SavedRecipe {
        SavedRecipe::new(SavedRecipeConfig {
            user_id,
            recipe_id,
            title: "Easy Beef Wellington".to_string(),
            image: None,
            servings: Some(4),
            ready_in_minutes: Some(90),
            source_url: None,
            summary: None,
            instructions: None,
            ingredients: Vec::new(),
        })
    }

    fn service(
        recipes: MockSavedRecipeRepository,
        provider: MockRecipeProvider,
        translator: MockTranslationProvider,
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
            MockUserRepository::new(),
            MockInventoryItemRepository::new(),
            recipes,
            MockHasherRepository::new(),
            MockTokenProvider::new(),
            MockProductLookup::new(),
            provider,
            translator,
            MockHealthCheckRepository::new(),
        )
    }

    #[tokio::test]
    async fn suggest_requires_ingredients() {
        let service = service(
            MockSavedRecipeRepository::new(),
            MockRecipeProvider::new(),
            MockTranslationProvider::new(),
        );

        let result = service
            .suggest_recipes(SuggestRecipesInput {
                ingredients: Vec::new(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn suggestions_are_localized() {
        let mut provider = MockRecipeProvider::new();
        provider.expect_find_by_ingredients().returning(|_| {
            Box::pin(async { Ok(vec![RecipeSummary {
                id: 7,
                title: "Easy Beef Wellington".to_string(),
                image: None,
                used_ingredient_count: 1,
                missed_ingredient_count: 1,
                used_ingredients: vec!["ham".to_string()],
                missed_ingredients: vec!["persimmon".to_string()],
            }]) })
        });

        let mut translator = MockTranslationProvider::new();
        // Only "persimmon" misses the dictionary and reaches the provider.
        translator
            .expect_translate()
            .returning(|text, _| Box::pin(async move { Ok(format!("{text} (it)")) }));

        let service = service(MockSavedRecipeRepository::new(), provider, translator);

        let recipes = service
            .suggest_recipes(SuggestRecipesInput {
                ingredients: vec!["ham".to_string(), "persimmon".to_string()],
            })
            .await
            .unwrap();

        assert_eq!(recipes[0].title, "manzo wellington facile");
        assert_eq!(recipes[0].used_ingredients, vec!["prosciutto"]);
        assert_eq!(recipes[0].missed_ingredients, vec!["persimmon (it)"]);
    }

    #[tokio::test]
    async fn duplicate_save_returns_existing_record() {
        let identity = identity();
        let existing = saved(identity.id(), 42);

        let mut recipes = MockSavedRecipeRepository::new();
        let stored = existing.clone();
        recipes
            .expect_get_by_recipe_id()
            .returning(move |_, _| Box::pin(async move { Ok(Some(stored.clone())) }));
        // No insert expectation: a second row would panic the test.

        let service = service(
            recipes,
            MockRecipeProvider::new(),
            MockTranslationProvider::new(),
        );

        let outcome = service
            .save_recipe(
                identity,
                SaveRecipeInput {
                    recipe_id: 42,
                    title: "Easy Beef Wellington".to_string(),
                    image: None,
                    servings: None,
                    ready_in_minutes: None,
                    source_url: None,
                    summary: None,
                    instructions: None,
                    ingredients: Vec::new(),
                },
            )
            .await
            .unwrap();

        match outcome {
            SaveRecipeOutcome::AlreadySaved(record) => assert_eq!(record.id, existing.id),
            SaveRecipeOutcome::Created(_) => panic!("expected conflict outcome"),
        }
    }

    #[tokio::test]
    async fn first_save_creates_the_record() {
        let mut recipes = MockSavedRecipeRepository::new();
        recipes.expect_get_by_recipe_id().returning(|_, _| Box::pin(async { Ok(None) }));
        recipes.expect_insert().returning(|r| Box::pin(async move { Ok(r) }));

        let service = service(
            recipes,
            MockRecipeProvider::new(),
            MockTranslationProvider::new(),
        );

        let outcome = service
            .save_recipe(
                identity(),
                SaveRecipeInput {
                    recipe_id: 42,
                    title: "Easy Beef Wellington".to_string(),
                    image: None,
                    servings: None,
                    ready_in_minutes: None,
                    source_url: None,
                    summary: None,
                    instructions: None,
                    ingredients: Vec::new(),
                },
            )
            .await
            .unwrap();

        assert!(matches!(outcome, SaveRecipeOutcome::Created(_)));
    }

    #[tokio::test]
    async fn delete_of_unknown_recipe_is_not_found() {
        let mut recipes = MockSavedRecipeRepository::new();
        recipes.expect_delete().returning(|_, _| Box::pin(async { Ok(None) }));

        let service = service(
            recipes,
            MockRecipeProvider::new(),
            MockTranslationProvider::new(),
        );

        let result = service.delete_saved_recipe(identity(), 42).await;
        assert!(matches!(result, Err(CoreError::NotFound)));
    }
}
