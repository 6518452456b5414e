use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredUser,
    http::{
        inventory::{ItemResponse, validators::AddItemValidator},
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
    ports::InventoryService, value_objects::CreateItemInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddItemResponse {
    pub product: ItemResponse,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/inventory/add",
    tag = "inventory",
    summary = "Add pantry item",
    description = "Stores a new item for the caller, usually prefilled from a barcode lookup.",
    request_body = AddItemValidator,
    responses(
        (status = 201, body = AddItemResponse),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn add_item(
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
    ValidateJson(payload): ValidateJson<AddItemValidator>,
) -> Result<Response<AddItemResponse>, ApiError> {
    let item = state
        .service
        .create_item(
            identity,
            CreateItemInput {
                barcode: payload.barcode,
                product_name: payload.product_name,
                brand: payload.brand,
                category: payload.category,
                quantity: payload.quantity,
                unit: payload.unit,
                expiry_date: payload.expiry_date,
                ingredients: payload.ingredients,
                nutrition: payload.nutrition_info,
                image_url: payload.image_url,
                suggestions: payload.suggestions,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddItemResponse {
        product: ItemResponse::from(item),
        message: "Product added".to_string(),
    }))
}
