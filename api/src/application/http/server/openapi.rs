use utoipa::OpenApi;

use crate::application::http::{
    authentication::router::AuthenticationApiDoc, health::HealthApiDoc,
    inventory::router::InventoryApiDoc, product::router::ProductApiDoc,
    recipe::router::RecipeApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dispensa API",
        description = "Household pantry tracker: barcode lookup, expiry tracking, recipe suggestions."
    ),
    tags(
        (name = "auth", description = "Registration, login and profile"),
        (name = "product", description = "Barcode lookup"),
        (name = "inventory", description = "Pantry items and expiry status"),
        (name = "recipe", description = "Recipe suggestions and favorites"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut doc = ApiDoc::openapi();
        doc.merge(AuthenticationApiDoc::openapi());
        doc.merge(ProductApiDoc::openapi());
        doc.merge(InventoryApiDoc::openapi());
        doc.merge(RecipeApiDoc::openapi());
        doc.merge(HealthApiDoc::openapi());
        doc
    }
}
