use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredUser,
    http::{
        recipe::{SavedRecipeResponse, validators::SaveRecipeValidator},
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use dispensa_core::domain::recipe::{
    entities::SaveRecipeOutcome, ports::RecipeService, value_objects::SaveRecipeInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveRecipeResponse {
    pub message: String,
    pub recipe: SavedRecipeResponse,
}

/// 409 payload: the error message plus the record that already exists.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecipeConflictResponse {
    pub error: String,
    pub recipe: SavedRecipeResponse,
}

#[utoipa::path(
    post,
    path = "/recipes/save",
    tag = "recipe",
    summary = "Save recipe",
    description = "Pins a recipe to the caller's favorites. Saving the same recipe twice answers 409 with the existing record.",
    request_body = SaveRecipeValidator,
    responses(
        (status = 201, body = SaveRecipeResponse),
        (status = 409, body = RecipeConflictResponse, description = "Already saved")
    )
)]
pub async fn save_recipe(
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
    ValidateJson(payload): ValidateJson<SaveRecipeValidator>,
) -> Result<axum::response::Response, ApiError> {
    let outcome = state
        .service
        .save_recipe(
            identity,
            SaveRecipeInput {
                recipe_id: payload.recipe_id,
                title: payload.title,
                image: payload.image,
                servings: payload.servings,
                ready_in_minutes: payload.ready_in_minutes,
                source_url: payload.source_url,
                summary: payload.summary,
                instructions: payload.instructions,
                ingredients: payload.ingredients,
            },
        )
        .await
        .map_err(ApiError::from)?;

    match outcome {
        SaveRecipeOutcome::Created(recipe) => Ok(Response::Created(SaveRecipeResponse {
            message: "Recipe saved".to_string(),
            recipe: SavedRecipeResponse::from(recipe),
        })
        .into_response()),
        SaveRecipeOutcome::AlreadySaved(existing) => Ok((
            StatusCode::CONFLICT,
            Json(RecipeConflictResponse {
                error: "Recipe already saved".to_string(),
                recipe: SavedRecipeResponse::from(existing),
            }),
        )
            .into_response()),
    }
}
