use chrono::NaiveDate;
use dispensa_core::domain::inventory::entities::NutritionInfo;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddItemValidator {
    #[validate(length(min = 1, message = "barcode is required"))]
    pub barcode: String,

    #[validate(length(min = 1, message = "productName is required"))]
    pub product_name: String,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[validate(range(min = 0, message = "quantity must not be negative"))]
    pub quantity: i32,

    #[serde(default)]
    pub unit: Option<String>,

    pub expiry_date: NaiveDate,

    #[serde(default)]
    pub ingredients: Option<String>,

    #[serde(default)]
    pub nutrition_info: Option<NutritionInfo>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemValidator {
    #[validate(length(min = 1, message = "productName is required"))]
    pub product_name: String,

    #[serde(default)]
    pub brand: Option<String>,

    #[validate(range(min = 0, message = "quantity must not be negative"))]
    pub quantity: i32,

    #[serde(default)]
    pub unit: Option<String>,

    pub expiry_date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateQuantityValidator {
    #[validate(range(min = 0, message = "quantity must not be negative"))]
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_quantity_fails_validation() {
        let payload = UpdateQuantityValidator { quantity: -1 };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn missing_expiry_date_fails_deserialization() {
        let result: Result<AddItemValidator, _> = serde_json::from_value(serde_json::json!({
            "barcode": "8001234567890",
            "productName": "Latte intero",
            "quantity": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn camel_case_payload_deserializes() {
        let payload: AddItemValidator = serde_json::from_value(serde_json::json!({
            "barcode": "8001234567890",
            "productName": "Latte intero",
            "quantity": 2,
            "unit": "L",
            "expiryDate": "2025-12-20",
            "nutritionInfo": { "energy": 264.0, "protein": 3.3 }
        }))
        .unwrap();
        assert_eq!(payload.product_name, "Latte intero");
        assert_eq!(
            payload.expiry_date,
            NaiveDate::from_ymd_opt(2025, 12, 20).unwrap()
        );
        assert_eq!(payload.nutrition_info.unwrap().protein, Some(3.3));
    }
}
