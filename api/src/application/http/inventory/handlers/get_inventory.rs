use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredUser,
    http::{
        inventory::ItemWithStatusResponse,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use dispensa_core::domain::inventory::ports::InventoryService;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GetInventoryResponse {
    pub products: Vec<ItemWithStatusResponse>,
}

#[utoipa::path(
    get,
    path = "/inventory",
    tag = "inventory",
    summary = "List pantry items",
    description = "The caller's items, annotated with days left and urgency, most urgent first.",
    responses(
        (status = 200, body = GetInventoryResponse),
        (status = 401, description = "Missing token")
    )
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    RequiredUser(identity): RequiredUser,
) -> Result<Response<GetInventoryResponse>, ApiError> {
    let items = state
        .service
        .list_items(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetInventoryResponse {
        products: items.into_iter().map(ItemWithStatusResponse::from).collect(),
    }))
}
