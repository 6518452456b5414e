use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredUser,
    http::{
        inventory::{ItemResponse, validators::UpdateQuantityValidator},
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use dispensa_core::domain::inventory::ports::InventoryService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateQuantityResponse {
    pub product: ItemResponse,
    pub message: String,
}

#[utoipa::path(
    patch,
    path = "/inventory/{item_id}/quantity",
    tag = "inventory",
    summary = "Update quantity",
    params(
        ("item_id" = Uuid, Path, description = "Item id"),
    ),
    request_body = UpdateQuantityValidator,
    responses(
        (status = 200, body = UpdateQuantityResponse),
        (status = 400, description = "Negative or missing quantity"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn update_quantity(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
    ValidateJson(payload): ValidateJson<UpdateQuantityValidator>,
) -> Result<Response<UpdateQuantityResponse>, ApiError> {
    let item = state
        .service
        .update_item_quantity(identity, item_id, payload.quantity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateQuantityResponse {
        product: ItemResponse::from(item),
        message: "Quantity updated".to_string(),
    }))
}
