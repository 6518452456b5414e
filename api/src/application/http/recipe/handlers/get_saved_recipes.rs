use axum::extract::State;
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
use dispensa_core::domain::recipe::ports::RecipeService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSavedRecipesResponse {
    pub recipes: Vec<SavedRecipeResponse>,
}

#[utoipa::path(
    get,
    path = "/recipes/saved",
    tag = "recipe",
    summary = "List saved recipes",
    description = "The caller's favorites, most recently saved first.",
    responses(
        (status = 200, body = GetSavedRecipesResponse),
        (status = 401, description = "Missing token")
    )
)]
pub async fn get_saved_recipes(
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
) -> Result<Response<GetSavedRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .list_saved_recipes(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSavedRecipesResponse {
        recipes: recipes.into_iter().map(SavedRecipeResponse::from).collect(),
    }))
}
