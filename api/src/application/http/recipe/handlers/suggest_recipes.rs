use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::{RecipeSummaryResponse, validators::SuggestRecipesValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use dispensa_core::domain::recipe::{
    ports::RecipeService, value_objects::SuggestRecipesInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SuggestRecipesResponse {
    pub recipes: Vec<RecipeSummaryResponse>,
}

#[utoipa::path(
    post,
    path = "/recipes/suggest",
    tag = "recipe",
    summary = "Suggest recipes",
    description = "Candidate recipes for the ingredients on hand, localized titles included.",
    request_body = SuggestRecipesValidator,
    responses(
        (status = 200, body = SuggestRecipesResponse),
        (status = 400, description = "No ingredients supplied"),
        (status = 502, description = "Recipe API unavailable")
    )
)]
pub async fn suggest_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SuggestRecipesValidator>,
) -> Result<Response<SuggestRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .suggest_recipes(SuggestRecipesInput {
            ingredients: payload.ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SuggestRecipesResponse {
        recipes: recipes.into_iter().map(RecipeSummaryResponse::from).collect(),
    }))
}
