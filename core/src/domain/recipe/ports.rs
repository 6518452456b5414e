use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{RecipeDetail, RecipeSummary, SaveRecipeOutcome, SavedRecipe},
        value_objects::{SaveRecipeInput, SuggestRecipesInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait SavedRecipeRepository: Send + Sync {
    fn insert(
        &self,
        recipe: SavedRecipe,
    ) -> impl Future<Output = Result<SavedRecipe, CoreError>> + Send;

    fn get_by_recipe_id(
        &self,
        user_id: Uuid,
        recipe_id: i64,
    ) -> impl Future<Output = Result<Option<SavedRecipe>, CoreError>> + Send;

    /// Caller's saved recipes, most recently saved first.
    fn list_by_owner(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<SavedRecipe>, CoreError>> + Send;

    fn delete(
        &self,
        user_id: Uuid,
        recipe_id: i64,
    ) -> impl Future<Output = Result<Option<SavedRecipe>, CoreError>> + Send;
}

/// Client port for the upstream recipe database.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeProvider: Send + Sync {
    fn find_by_ingredients(
        &self,
        ingredients: &[String],
    ) -> impl Future<Output = Result<Vec<RecipeSummary>, CoreError>> + Send;

    fn get_information(
        &self,
        recipe_id: i64,
    ) -> impl Future<Output = Result<RecipeDetail, CoreError>> + Send;
}

pub trait RecipeService: Send + Sync {
    fn suggest_recipes(
        &self,
        input: SuggestRecipesInput,
    ) -> impl Future<Output = Result<Vec<RecipeSummary>, CoreError>> + Send;

    fn get_recipe_detail(
        &self,
        recipe_id: i64,
    ) -> impl Future<Output = Result<RecipeDetail, CoreError>> + Send;

    fn save_recipe(
        &self,
        identity: Identity,
        input: SaveRecipeInput,
    ) -> impl Future<Output = Result<SaveRecipeOutcome, CoreError>> + Send;

    fn list_saved_recipes(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<SavedRecipe>, CoreError>> + Send;

    fn delete_saved_recipe(
        &self,
        identity: Identity,
        recipe_id: i64,
    ) -> impl Future<Output = Result<SavedRecipe, CoreError>> + Send;
}
