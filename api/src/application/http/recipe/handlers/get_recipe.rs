use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::RecipeDetailResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use dispensa_core::domain::recipe::ports::RecipeService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipeResponse {
    pub recipe: RecipeDetailResponse,
}

#[utoipa::path(
    get,
    path = "/recipes/{recipe_id}",
    tag = "recipe",
    summary = "Recipe detail",
    params(
        ("recipe_id" = i64, Path, description = "Upstream recipe id"),
    ),
    responses(
        (status = 200, body = GetRecipeResponse),
        (status = 502, description = "Recipe API unavailable")
    )
)]
pub async fn get_recipe(
    Path(recipe_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<GetRecipeResponse>, ApiError> {
    let detail = state
        .service
        .get_recipe_detail(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipeResponse {
        recipe: RecipeDetailResponse::from(detail),
    }))
}
