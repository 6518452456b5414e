use dispensa_core::domain::{
    inventory::entities::NutritionInfo, product::entities::ProductDescriptor,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod handlers;
pub mod router;
pub mod validators;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub barcode: String,
    pub product_name: String,
    pub brand: String,
    pub category: String,
    pub ingredients: String,
    pub nutrition_info: NutritionInfo,
    pub image_url: Option<String>,
    pub quantity: i32,
    pub unit: String,
}

impl From<ProductDescriptor> for ProductResponse {
    fn from(product: ProductDescriptor) -> Self {
        Self {
            barcode: product.barcode,
            product_name: product.product_name,
            brand: product.brand,
            category: product.category,
            ingredients: product.ingredients,
            nutrition_info: product.nutrition,
            image_url: product.image_url,
            quantity: product.quantity,
            unit: product.unit,
        }
    }
}
