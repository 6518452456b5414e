use chrono::NaiveDate;

use crate::domain::inventory::entities::NutritionInfo;

#[derive(Debug, Clone)]
pub struct CreateItemInput {
    pub barcode: String,
    pub product_name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub quantity: i32,
    pub unit: Option<String>,
    pub expiry_date: NaiveDate,
    pub ingredients: Option<String>,
    pub nutrition: Option<NutritionInfo>,
    pub image_url: Option<String>,
    pub suggestions: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct UpdateItemInput {
    pub product_name: String,
    pub brand: Option<String>,
    pub quantity: i32,
    pub unit: Option<String>,
    pub expiry_date: NaiveDate,
}
