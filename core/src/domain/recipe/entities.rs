use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredient {
    pub name: String,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub original: Option<String>,
}

/// Candidate recipe from an ingredient search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSummary {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub used_ingredient_count: i32,
    pub missed_ingredient_count: i32,
    pub used_ingredients: Vec<String>,
    pub missed_ingredients: Vec<String>,
}

/// Full recipe record as returned by the upstream detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDetail {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub servings: Option<i32>,
    pub ready_in_minutes: Option<i32>,
    pub source_url: Option<String>,
    pub summary: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<RecipeIngredient>,
}

/// A recipe pinned by a user. Keyed by `(user_id, recipe_id)`; the same
/// upstream recipe can never be saved twice by the same owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SavedRecipe {
    pub id: Uuid,
    pub user_id: Uuid,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SavedRecipeConfig {
    pub user_id: Uuid,
    pub recipe_id: i64,
    pub title: String,
    pub image: Option<String>,
    pub servings: Option<i32>,
    pub ready_in_minutes: Option<i32>,
    pub source_url: Option<String>,
    pub summary: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<RecipeIngredient>,
}

impl SavedRecipe {
    pub fn new(config: SavedRecipeConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            recipe_id: config.recipe_id,
            title: config.title,
            image: config.image,
            servings: config.servings,
            ready_in_minutes: config.ready_in_minutes,
            source_url: config.source_url,
            summary: config.summary,
            instructions: config.instructions,
            ingredients: config.ingredients,
            saved_at: now,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Result of a save attempt. A duplicate is a conflict signal, not a failure:
/// the already-stored record rides along so the caller can surface it.
#[derive(Debug, Clone)]
pub enum SaveRecipeOutcome {
    Created(SavedRecipe),
    AlreadySaved(SavedRecipe),
}
