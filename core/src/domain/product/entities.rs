use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::inventory::entities::NutritionInfo;

/// Product metadata resolved from a barcode, already shaped for the client:
/// Italian-first naming, normalized category, per-100g nutrition facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDescriptor {
    pub barcode: String,
    pub product_name: String,
    pub brand: String,
    pub category: String,
    pub ingredients: String,
    pub nutrition: NutritionInfo,
    pub image_url: Option<String>,
    pub quantity: i32,
    pub unit: String,
}

#[derive(Debug, Clone)]
pub struct ProductLookupOutput {
    pub product: ProductDescriptor,
    pub suggestions: Vec<String>,
}
