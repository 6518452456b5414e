use chrono::{DateTime, Utc};
use dispensa_core::domain::recipe::entities::{
    RecipeDetail, RecipeIngredient, RecipeSummary, SavedRecipe,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod handlers;
pub mod router;
pub mod validators;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummaryResponse {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub used_ingredient_count: i32,
    pub missed_ingredient_count: i32,
    pub used_ingredients: Vec<String>,
    pub missed_ingredients: Vec<String>,
}

impl From<RecipeSummary> for RecipeSummaryResponse {
    fn from(recipe: RecipeSummary) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            image: recipe.image,
            used_ingredient_count: recipe.used_ingredient_count,
            missed_ingredient_count: recipe.missed_ingredient_count,
            used_ingredients: recipe.used_ingredients,
            missed_ingredients: recipe.missed_ingredients,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetailResponse {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub servings: Option<i32>,
    pub ready_in_minutes: Option<i32>,
    pub source_url: Option<String>,
    pub summary: Option<String>,
    pub instructions: Option<String>,
    pub extended_ingredients: Vec<RecipeIngredient>,
}

impl From<RecipeDetail> for RecipeDetailResponse {
    fn from(recipe: RecipeDetail) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            image: recipe.image,
            servings: recipe.servings,
            ready_in_minutes: recipe.ready_in_minutes,
            source_url: recipe.source_url,
            summary: recipe.summary,
            instructions: recipe.instructions,
            extended_ingredients: recipe.ingredients,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipeResponse {
    pub id: uuid::Uuid,
    pub recipe_id: i64,
    pub title: String,
    pub image: Option<String>,
    pub servings: Option<i32>,
    pub ready_in_minutes: Option<i32>,
    pub source_url: Option<String>,
    pub summary: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<RecipeIngredient>,
    pub saved_at: DateTime<Utc>,
}

impl From<SavedRecipe> for SavedRecipeResponse {
    fn from(recipe: SavedRecipe) -> Self {
        Self {
            id: recipe.id,
            recipe_id: recipe.recipe_id,
            title: recipe.title,
            image: recipe.image,
            servings: recipe.servings,
            ready_in_minutes: recipe.ready_in_minutes,
            source_url: recipe.source_url,
            summary: recipe.summary,
            instructions: recipe.instructions,
            ingredients: recipe.ingredients,
            saved_at: recipe.saved_at,
        }
    }
}
