use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredUser,
    http::{
        inventory::{ItemResponse, validators::UpdateItemValidator},
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use dispensa_core::domain::inventory::{
    ports::InventoryService, value_objects::UpdateItemInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateItemResponse {
    pub product: ItemResponse,
    pub message: String,
}

#[utoipa::path(
    patch,
    path = "/inventory/{item_id}",
    tag = "inventory",
    summary = "Update pantry item",
    description = "Replaces name, quantity and expiry date; brand and unit when provided.",
    params(
        ("item_id" = Uuid, Path, description = "Item id"),
    ),
    request_body = UpdateItemValidator,
    responses(
        (status = 200, body = UpdateItemResponse),
        (status = 400, description = "Missing required fields"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn update_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
    ValidateJson(payload): ValidateJson<UpdateItemValidator>,
) -> Result<Response<UpdateItemResponse>, ApiError> {
    let item = state
        .service
        .update_item(
            identity,
            item_id,
            UpdateItemInput {
                product_name: payload.product_name,
                brand: payload.brand,
                quantity: payload.quantity,
                unit: payload.unit,
                expiry_date: payload.expiry_date,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateItemResponse {
        product: ItemResponse::from(item),
        message: "Product updated".to_string(),
    }))
}
