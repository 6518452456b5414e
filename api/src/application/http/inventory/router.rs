use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use utoipa::OpenApi;

use super::handlers::{
    add_item::{__path_add_item, add_item},
    delete_item::{__path_delete_item, delete_item},
    get_inventory::{__path_get_inventory, get_inventory},
    update_item::{__path_update_item, update_item},
    update_quantity::{__path_update_quantity, update_quantity},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    add_item,
    get_inventory,
    update_quantity,
    update_item,
    delete_item
))]
pub struct InventoryApiDoc;

pub fn inventory_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/inventory/add"), post(add_item))
        .route(&format!("{root_path}/inventory"), get(get_inventory))
        .route(
            &format!("{root_path}/inventory/{{item_id}}/quantity"),
            patch(update_quantity),
        )
        .route(
            &format!("{root_path}/inventory/{{item_id}}"),
            patch(update_item).delete(delete_item),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
