use chrono::{DateTime, NaiveDate, Utc};
use dispensa_core::domain::inventory::entities::{
    ExpiryStatus, InventoryItem, ItemWithStatus, NutritionInfo,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub mod handlers;
pub mod router;
pub mod validators;

/// Wire shape of a pantry item.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: Uuid,
    pub barcode: String,
    pub product_name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub quantity: i32,
    pub unit: String,
    pub expiry_date: NaiveDate,
    pub ingredients: Option<String>,
    pub nutrition_info: Option<NutritionInfo>,
    pub image_url: Option<String>,
    pub suggestions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<InventoryItem> for ItemResponse {
    fn from(item: InventoryItem) -> Self {
        Self {
            id: item.id,
            barcode: item.barcode,
            product_name: item.product_name,
            brand: item.brand,
            category: item.category,
            quantity: item.quantity,
            unit: item.unit,
            expiry_date: item.expiry_date,
            ingredients: item.ingredients,
            nutrition_info: item.nutrition,
            image_url: item.image_url,
            suggestions: item.suggestions,
            created_at: item.created_at,
        }
    }
}

/// A pantry item plus its derived urgency, as listed reads return it.
#[derive(Debug, Serialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemWithStatusResponse {
    #[serde(flatten)]
    pub item: ItemResponse,
    pub days_left: i64,
    pub status: ExpiryStatus,
}

impl From<ItemWithStatus> for ItemWithStatusResponse {
    fn from(entry: ItemWithStatus) -> Self {
        Self {
            item: ItemResponse::from(entry.item),
            days_left: entry.days_left,
            status: entry.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispensa_core::domain::inventory::entities::InventoryItemConfig;

    #[test]
    fn listed_item_serializes_days_left_and_status() {
        let item = InventoryItem::new(InventoryItemConfig {
            user_id: Uuid::new_v4(),
            barcode: "8001234567890".to_string(),
            product_name: "Latte intero".to_string(),
            brand: None,
            category: None,
            quantity: 2,
            unit: None,
            expiry_date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
            ingredients: None,
            nutrition: None,
            image_url: None,
            suggestions: None,
        });

        let response = ItemWithStatusResponse {
            item: ItemResponse::from(item),
            days_left: 10,
            status: ExpiryStatus::Ok,
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["daysLeft"], 10);
        assert_eq!(json["status"], "OK");
        assert_eq!(json["productName"], "Latte intero");
        assert_eq!(json["unit"], "pz");
    }
}
