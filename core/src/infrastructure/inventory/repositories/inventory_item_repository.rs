use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        inventory::{entities::InventoryItem, ports::InventoryItemRepository},
    },
    entity::inventory_items::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresInventoryItemRepository {
    pub db: DatabaseConnection,
}

impl PostgresInventoryItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(item: &InventoryItem) -> Result<ActiveModel, CoreError> {
    let nutrition = item
        .nutrition
        .as_ref()
        .map(serde_json::to_value)
        .transpose()
        .map_err(|e| {
            error!("Failed to serialize nutrition info: {}", e);
            CoreError::InternalServerError
        })?;
    let suggestions = serde_json::to_value(&item.suggestions).map_err(|e| {
        error!("Failed to serialize suggestions: {}", e);
        CoreError::InternalServerError
    })?;

    Ok(ActiveModel {
        id: Set(item.id),
        user_id: Set(item.user_id),
        barcode: Set(item.barcode.clone()),
        product_name: Set(item.product_name.clone()),
        brand: Set(item.brand.clone()),
        category: Set(item.category.clone()),
        quantity: Set(item.quantity),
        unit: Set(item.unit.clone()),
        expiry_date: Set(item.expiry_date),
        ingredients: Set(item.ingredients.clone()),
        nutrition: Set(nutrition),
        image_url: Set(item.image_url.clone()),
        suggestions: Set(suggestions),
        created_at: Set(item.created_at.fixed_offset()),
        updated_at: Set(item.updated_at.fixed_offset()),
    })
}

impl InventoryItemRepository for PostgresInventoryItemRepository {
    async fn insert(&self, item: InventoryItem) -> Result<InventoryItem, CoreError> {
        let created = Entity::insert(to_active_model(&item)?)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create inventory item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(InventoryItem::from(created))
    }

    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<InventoryItem>, CoreError> {
        let items = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list inventory items: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(items.into_iter().map(InventoryItem::from).collect())
    }

    async fn get_by_id(
        &self,
        item_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<InventoryItem>, CoreError> {
        let item = Entity::find()
            .filter(Column::Id.eq(item_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get inventory item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(item.map(InventoryItem::from))
    }

    async fn update(&self, item: InventoryItem) -> Result<InventoryItem, CoreError> {
        let updated = Entity::update(to_active_model(&item)?)
            .filter(Column::UserId.eq(item.user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update inventory item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(InventoryItem::from(updated))
    }

    async fn delete(
        &self,
        item_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<InventoryItem>, CoreError> {
        let Some(existing) = self.get_by_id(item_id, user_id).await? else {
            return Ok(None);
        };

        Entity::delete_many()
            .filter(Column::Id.eq(item_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete inventory item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Some(existing))
    }
}
