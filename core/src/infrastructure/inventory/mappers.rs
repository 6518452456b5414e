use crate::domain::inventory::entities::{InventoryItem, NutritionInfo};
use crate::entity::inventory_items::Model as ItemModel;

impl From<ItemModel> for InventoryItem {
    fn from(model: ItemModel) -> Self {
        let nutrition: Option<NutritionInfo> = model
            .nutrition
            .and_then(|value| serde_json::from_value(value).ok());
        let suggestions: Vec<String> =
            serde_json::from_value(model.suggestions).unwrap_or_default();

        InventoryItem {
            id: model.id,
            user_id: model.user_id,
            barcode: model.barcode,
            product_name: model.product_name,
            brand: model.brand,
            category: model.category,
            quantity: model.quantity,
            unit: model.unit,
            expiry_date: model.expiry_date,
            ingredients: model.ingredients,
            nutrition,
            image_url: model.image_url,
            suggestions,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}
