use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::lookup_product::{__path_lookup_product, lookup_product};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(lookup_product))]
pub struct ProductApiDoc;

pub fn product_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new().route(&format!("{root_path}/product/lookup"), post(lookup_product))
}
