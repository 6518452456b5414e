use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    inventory::{
        entities::{InventoryItem, ItemWithStatus},
        value_objects::{CreateItemInput, UpdateItemInput},
    },
};

/// Repository trait for inventory items. Every query and mutation is scoped
/// to the owning user; an item is never visible outside its owner.
#[cfg_attr(test, mockall::automock)]
pub trait InventoryItemRepository: Send + Sync {
    fn insert(
        &self,
        item: InventoryItem,
    ) -> impl Future<Output = Result<InventoryItem, CoreError>> + Send;

    fn list_by_owner(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<InventoryItem>, CoreError>> + Send;

    fn get_by_id(
        &self,
        item_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<InventoryItem>, CoreError>> + Send;

    fn update(
        &self,
        item: InventoryItem,
    ) -> impl Future<Output = Result<InventoryItem, CoreError>> + Send;

    /// Removes the item and returns it, or `None` when no item with that id
    /// is owned by `user_id`.
    fn delete(
        &self,
        item_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<InventoryItem>, CoreError>> + Send;
}

pub trait InventoryService: Send + Sync {
    fn create_item(
        &self,
        identity: Identity,
        input: CreateItemInput,
    ) -> impl Future<Output = Result<InventoryItem, CoreError>> + Send;

    /// All items of the caller, annotated with `days_left`/`status` and
    /// sorted most urgent first.
    fn list_items(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<ItemWithStatus>, CoreError>> + Send;

    fn update_item(
        &self,
        identity: Identity,
        item_id: Uuid,
        input: UpdateItemInput,
    ) -> impl Future<Output = Result<InventoryItem, CoreError>> + Send;

    fn update_item_quantity(
        &self,
        identity: Identity,
        item_id: Uuid,
        quantity: i32,
    ) -> impl Future<Output = Result<InventoryItem, CoreError>> + Send;

    fn delete_item(
        &self,
        identity: Identity,
        item_id: Uuid,
    ) -> impl Future<Output = Result<InventoryItem, CoreError>> + Send;
}
