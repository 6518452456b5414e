use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    delete_saved_recipe::{__path_delete_saved_recipe, delete_saved_recipe},
    get_recipe::{__path_get_recipe, get_recipe},
    get_saved_recipes::{__path_get_saved_recipes, get_saved_recipes},
    save_recipe::{__path_save_recipe, save_recipe},
    suggest_recipes::{__path_suggest_recipes, suggest_recipes},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    suggest_recipes,
    save_recipe,
    get_saved_recipes,
    delete_saved_recipe,
    get_recipe
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    // `/recipes/saved` must win over `/recipes/{recipe_id}`; axum prefers the
    // static segment, so both can be registered side by side.
    Router::new()
        .route(&format!("{root_path}/recipes/suggest"), post(suggest_recipes))
        .route(&format!("{root_path}/recipes/save"), post(save_recipe))
        .route(
            &format!("{root_path}/recipes/saved"),
            get(get_saved_recipes),
        )
        .route(
            &format!("{root_path}/recipes/saved/{{recipe_id}}"),
            delete(delete_saved_recipe),
        )
        .route(&format!("{root_path}/recipes/{{recipe_id}}"), get(get_recipe))
}
