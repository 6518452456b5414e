use crate::domain::recipe::entities::{RecipeIngredient, SavedRecipe};
use crate::entity::saved_recipes::Model as SavedRecipeModel;

impl From<SavedRecipeModel> for SavedRecipe {
    fn from(model: SavedRecipeModel) -> Self {
        let ingredients: Vec<RecipeIngredient> =
            serde_json::from_value(model.ingredients).unwrap_or_default();

        SavedRecipe {
            id: model.id,
            user_id: model.user_id,
            recipe_id: model.recipe_id,
            title: model.title,
            image: model.image,
            servings: model.servings,
            ready_in_minutes: model.ready_in_minutes,
            source_url: model.source_url,
            summary: model.summary,
            instructions: model.instructions,
            ingredients,
            saved_at: model.saved_at.to_utc(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}
