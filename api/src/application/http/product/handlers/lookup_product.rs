use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    product::{ProductResponse, validators::LookupProductValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use dispensa_core::domain::{
    common::entities::app_errors::CoreError, product::ports::ProductService,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LookupProductResponse {
    pub product: ProductResponse,
    pub suggestions: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/product/lookup",
    tag = "product",
    summary = "Barcode lookup",
    description = "Resolves a barcode against the public food database and shapes the result for the add-item form.",
    request_body = LookupProductValidator,
    responses(
        (status = 200, body = LookupProductResponse),
        (status = 404, description = "Unknown barcode"),
        (status = 502, description = "Product database unavailable")
    )
)]
pub async fn lookup_product(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LookupProductValidator>,
) -> Result<Response<LookupProductResponse>, ApiError> {
    let output = state
        .service
        .lookup_product(payload.barcode)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("product not found".to_string()),
            other => ApiError::from(other),
        })?;

    Ok(Response::OK(LookupProductResponse {
        product: ProductResponse::from(output.product),
        suggestions: output.suggestions,
    }))
}
