use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{entities::SavedRecipe, ports::SavedRecipeRepository},
    },
    entity::saved_recipes::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresSavedRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresSavedRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SavedRecipeRepository for PostgresSavedRecipeRepository {
    async fn insert(&self, recipe: SavedRecipe) -> Result<SavedRecipe, CoreError> {
        let ingredients = serde_json::to_value(&recipe.ingredients).map_err(|e| {
            error!("Failed to serialize recipe ingredients: {}", e);
            CoreError::InternalServerError
        })?;

        let active_model = ActiveModel {
            id: Set(recipe.id),
            user_id: Set(recipe.user_id),
            recipe_id: Set(recipe.recipe_id),
            title: Set(recipe.title.clone()),
            image: Set(recipe.image.clone()),
            servings: Set(recipe.servings),
            ready_in_minutes: Set(recipe.ready_in_minutes),
            source_url: Set(recipe.source_url.clone()),
            summary: Set(recipe.summary.clone()),
            instructions: Set(recipe.instructions.clone()),
            ingredients: Set(ingredients),
            saved_at: Set(recipe.saved_at.fixed_offset()),
            created_at: Set(recipe.created_at.fixed_offset()),
            updated_at: Set(recipe.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to save recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(SavedRecipe::from(created))
    }

    async fn get_by_recipe_id(
        &self,
        user_id: Uuid,
        recipe_id: i64,
    ) -> Result<Option<SavedRecipe>, CoreError> {
        let recipe = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::RecipeId.eq(recipe_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get saved recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(recipe.map(SavedRecipe::from))
    }

    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<SavedRecipe>, CoreError> {
        let recipes = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::SavedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list saved recipes: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(recipes.into_iter().map(SavedRecipe::from).collect())
    }

    async fn delete(
        &self,
        user_id: Uuid,
        recipe_id: i64,
    ) -> Result<Option<SavedRecipe>, CoreError> {
        let Some(existing) = self.get_by_recipe_id(user_id, recipe_id).await? else {
            return Ok(None);
        };

        Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::RecipeId.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete saved recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Some(existing))
    }
}
