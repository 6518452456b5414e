use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredUser,
    http::{
        inventory::ItemResponse,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use dispensa_core::domain::inventory::ports::InventoryService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteItemResponse {
    pub message: String,
    pub product: ItemResponse,
}

#[utoipa::path(
    delete,
    path = "/inventory/{item_id}",
    tag = "inventory",
    summary = "Delete pantry item",
    params(
        ("item_id" = Uuid, Path, description = "Item id"),
    ),
    responses(
        (status = 200, body = DeleteItemResponse),
        (status = 404, description = "Item not found")
    )
)]
pub async fn delete_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
) -> Result<Response<DeleteItemResponse>, ApiError> {
    let item = state
        .service
        .delete_item(identity, item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteItemResponse {
        message: "Product deleted".to_string(),
        product: ItemResponse::from(item),
    }))
}
