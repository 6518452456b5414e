use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredUser,
    http::{
        recipe::SavedRecipeResponse,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use dispensa_core::domain::{
    common::entities::app_errors::CoreError, recipe::ports::RecipeService,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteSavedRecipeResponse {
    pub message: String,
    pub recipe: SavedRecipeResponse,
}

#[utoipa::path(
    delete,
    path = "/recipes/saved/{recipe_id}",
    tag = "recipe",
    summary = "Remove saved recipe",
    params(
        ("recipe_id" = i64, Path, description = "Upstream recipe id"),
    ),
    responses(
        (status = 200, body = DeleteSavedRecipeResponse),
        (status = 404, description = "Recipe not saved")
    )
)]
pub async fn delete_saved_recipe(
    Path(recipe_id): Path<i64>,
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
) -> Result<Response<DeleteSavedRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .delete_saved_recipe(identity, recipe_id)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("recipe not found".to_string()),
            other => ApiError::from(other),
        })?;

    Ok(Response::OK(DeleteSavedRecipeResponse {
        message: "Recipe removed".to_string(),
        recipe: SavedRecipeResponse::from(recipe),
    }))
}
