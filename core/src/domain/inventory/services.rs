use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    inventory::{
        entities::{InventoryItem, InventoryItemConfig, ItemWithStatus},
        ports::{InventoryItemRepository, InventoryService},
        value_objects::{CreateItemInput, UpdateItemInput},
    },
    jwt::ports::TokenProvider,
    product::ports::ProductLookup,
    recipe::ports::{RecipeProvider, SavedRecipeRepository},
    translation::ports::TranslationProvider,
    user::ports::UserRepository,
};

fn require_non_empty(value: &str, field: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

fn require_non_negative(quantity: i32) -> Result<(), CoreError> {
    if quantity < 0 {
        return Err(CoreError::Validation(
            "quantity must not be negative".to_string(),
        ));
    }
    Ok(())
}

impl<U, I, SR, H, TK, PL, RP, TR, HC> InventoryService
    for Service<U, I, SR, H, TK, PL, RP, TR, HC>
where
    U: UserRepository,
    I: InventoryItemRepository,
    SR: SavedRecipeRepository,
    H: HasherRepository,
    TK: TokenProvider,
    PL: ProductLookup,
    RP: RecipeProvider,
    TR: TranslationProvider,
    HC: HealthCheckRepository,
{
    async fn create_item(
        &self,
        identity: Identity,
        input: CreateItemInput,
    ) -> Result<InventoryItem, CoreError> {
        require_non_empty(&input.barcode, "barcode")?;
        require_non_empty(&input.product_name, "productName")?;
        require_non_negative(input.quantity)?;

        let item = InventoryItem::new(InventoryItemConfig {
            user_id: identity.id(),
            barcode: input.barcode,
            product_name: input.product_name,
            brand: input.brand,
            category: input.category,
            quantity: input.quantity,
            unit: input.unit,
            expiry_date: input.expiry_date,
            ingredients: input.ingredients,
            nutrition: input.nutrition,
            image_url: input.image_url,
            suggestions: input.suggestions,
        });

        self.item_repository.insert(item).await
    }

    async fn list_items(&self, identity: Identity) -> Result<Vec<ItemWithStatus>, CoreError> {
        let items = self.item_repository.list_by_owner(identity.id()).await?;

        let now = Utc::now();
        let mut annotated: Vec<ItemWithStatus> = items
            .into_iter()
            .map(|item| ItemWithStatus::derive(item, now))
            .collect();

        // Most urgent first. Ties keep their stored order.
        annotated.sort_by_key(|entry| entry.days_left);

        Ok(annotated)
    }

    async fn update_item(
        &self,
        identity: Identity,
        item_id: Uuid,
        input: UpdateItemInput,
    ) -> Result<InventoryItem, CoreError> {
        require_non_empty(&input.product_name, "productName")?;
        require_non_negative(input.quantity)?;

        let mut item = self
            .item_repository
            .get_by_id(item_id, identity.id())
            .await?
            .ok_or(CoreError::NotFound)?;

        item.apply_update(input);

        self.item_repository.update(item).await
    }

    async fn update_item_quantity(
        &self,
        identity: Identity,
        item_id: Uuid,
        quantity: i32,
    ) -> Result<InventoryItem, CoreError> {
        require_non_negative(quantity)?;

        let mut item = self
            .item_repository
            .get_by_id(item_id, identity.id())
            .await?
            .ok_or(CoreError::NotFound)?;

        item.set_quantity(quantity);

        self.item_repository.update(item).await
    }

    async fn delete_item(
        &self,
        identity: Identity,
        item_id: Uuid,
    ) -> Result<InventoryItem, CoreError> {
        self.item_repository
            .delete(item_id, identity.id())
            .await?
            .ok_or(CoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::{Duration, NaiveDate, Utc};

    use super::*;
    use crate::domain::{
        crypto::ports::MockHasherRepository,
        health::ports::MockHealthCheckRepository,
        inventory::entities::ExpiryStatus,
        inventory::ports::MockInventoryItemRepository,
        jwt::ports::MockTokenProvider,
        product::ports::MockProductLookup,
        recipe::ports::{MockRecipeProvider, MockSavedRecipeRepository},
        translation::ports::MockTranslationProvider,
        user::entities::{User, UserConfig},
    };
    use crate::domain::user::ports::MockUserRepository;

    fn identity() -> Identity {
        Identity::new(User::new(UserConfig {
            email: "ada@example.com".to_string(),
            password_hash: None,
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            photo_url: None,
        }))
    }

    fn item_for(user_id: Uuid, name: &str, expiry_date: NaiveDate) -> InventoryItem {
        InventoryItem::new(InventoryItemConfig {
            user_id,
            barcode: "8001234567890".to_string(),
            product_name: name.to_string(),
            brand: None,
            category: None,
            quantity: 2,
            unit: None,
            expiry_date,
            ingredients: None,
            nutrition: None,
            image_url: None,
            suggestions: None,
        })
    }

    fn service<I: InventoryItemRepository>(
        items: I,
    ) -> Service<
        MockUserRepository,
        I,
        MockSavedRecipeRepository,
        MockHasherRepository,
        MockTokenProvider,
        MockProductLookup,
        MockRecipeProvider,
        MockTranslationProvider,
        MockHealthCheckRepository,
    > {
        Service::new(
            MockUserRepository::new(),
            items,
            MockSavedRecipeRepository::new(),
            MockHasherRepository::new(),
            MockTokenProvider::new(),
            MockProductLookup::new(),
            MockRecipeProvider::new(),
            MockTranslationProvider::new(),
            MockHealthCheckRepository::new(),
        )
    }

    fn in_days(days: i64) -> NaiveDate {
        (Utc::now() + Duration::days(days)).date_naive()
    }

    #[tokio::test]
    async fn create_rejects_empty_barcode() {
        // Repository mock carries no expectations: reaching it would panic.
        let service = service(MockInventoryItemRepository::new());

        let result = service
            .create_item(
                identity(),
                CreateItemInput {
                    barcode: String::new(),
                    product_name: "Latte intero".to_string(),
                    brand: None,
                    category: None,
                    quantity: 1,
                    unit: None,
                    expiry_date: in_days(10),
                    ingredients: None,
                    nutrition: None,
                    image_url: None,
                    suggestions: None,
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn negative_quantity_never_reaches_the_store() {
        let service = service(MockInventoryItemRepository::new());

        let result = service
            .update_item_quantity(identity(), Uuid::new_v4(), -1)
            .await;

        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn quantity_update_on_missing_item_is_not_found() {
        let mut items = MockInventoryItemRepository::new();
        items.expect_get_by_id().returning(|_, _| Box::pin(async { Ok(None) }));
        let service = service(items);

        let result = service
            .update_item_quantity(identity(), Uuid::new_v4(), 5)
            .await;

        assert!(matches!(result, Err(CoreError::NotFound)));
    }

    #[tokio::test]
    async fn delete_of_missing_item_is_not_found() {
        let mut items = MockInventoryItemRepository::new();
        items.expect_delete().returning(|_, _| Box::pin(async { Ok(None) }));
        let service = service(items);

        let result = service.delete_item(identity(), Uuid::new_v4()).await;

        assert!(matches!(result, Err(CoreError::NotFound)));
    }

    #[tokio::test]
    async fn list_sorts_most_urgent_first() {
        let identity = identity();
        let owner = identity.id();
        let stored = vec![
            item_for(owner, "conserva", in_days(30)),
            item_for(owner, "yogurt", in_days(2)),
            item_for(owner, "pane", in_days(5)),
        ];

        let mut items = MockInventoryItemRepository::new();
        let returned = stored.clone();
        items
            .expect_list_by_owner()
            .returning(move |_| Box::pin(async move { Ok(returned.clone()) }));
        let service = service(items);

        let listed = service.list_items(identity).await.unwrap();

        let names: Vec<&str> = listed
            .iter()
            .map(|entry| entry.item.product_name.as_str())
            .collect();
        assert_eq!(names, vec!["yogurt", "pane", "conserva"]);
        assert_eq!(listed[0].status, ExpiryStatus::Urgent);
        assert_eq!(listed[1].status, ExpiryStatus::Warning);
        assert_eq!(listed[2].status, ExpiryStatus::Ok);
    }

    /// Minimal stateful store so the whole lifecycle can run through the real
    /// service logic.
    #[derive(Clone, Default)]
    struct InMemoryItems(Arc<Mutex<Vec<InventoryItem>>>);

    impl InventoryItemRepository for InMemoryItems {
        async fn insert(&self, item: InventoryItem) -> Result<InventoryItem, CoreError> {
            self.0.lock().unwrap().push(item.clone());
            Ok(item)
        }

        async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<InventoryItem>, CoreError> {
            Ok(self
                .0
                .lock()
                .unwrap()
                .iter()
                .filter(|item| item.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn get_by_id(
            &self,
            item_id: Uuid,
            user_id: Uuid,
        ) -> Result<Option<InventoryItem>, CoreError> {
            Ok(self
                .0
                .lock()
                .unwrap()
                .iter()
                .find(|item| item.id == item_id && item.user_id == user_id)
                .cloned())
        }

        async fn update(&self, item: InventoryItem) -> Result<InventoryItem, CoreError> {
            let mut items = self.0.lock().unwrap();
            let stored = items
                .iter_mut()
                .find(|stored| stored.id == item.id)
                .ok_or(CoreError::NotFound)?;
            *stored = item.clone();
            Ok(item)
        }

        async fn delete(
            &self,
            item_id: Uuid,
            user_id: Uuid,
        ) -> Result<Option<InventoryItem>, CoreError> {
            let mut items = self.0.lock().unwrap();
            let position = items
                .iter()
                .position(|item| item.id == item_id && item.user_id == user_id);
            Ok(position.map(|index| items.remove(index)))
        }
    }

    #[tokio::test]
    async fn full_item_lifecycle() {
        let store = InMemoryItems::default();
        let service = service(store.clone());
        let identity = identity();

        let created = service
            .create_item(
                identity.clone(),
                CreateItemInput {
                    barcode: "8001234567890".to_string(),
                    product_name: "Latte intero".to_string(),
                    brand: Some("Parmalat".to_string()),
                    category: Some("Dairy".to_string()),
                    quantity: 2,
                    unit: Some("L".to_string()),
                    expiry_date: in_days(10),
                    ingredients: None,
                    nutrition: None,
                    image_url: None,
                    suggestions: None,
                },
            )
            .await
            .unwrap();

        let listed = service.list_items(identity.clone()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].days_left, 10);
        assert_eq!(listed[0].status, ExpiryStatus::Ok);

        service
            .update_item_quantity(identity.clone(), created.id, 5)
            .await
            .unwrap();

        let listed = service.list_items(identity.clone()).await.unwrap();
        assert_eq!(listed[0].item.quantity, 5);
        assert_eq!(listed[0].status, ExpiryStatus::Ok);

        service
            .delete_item(identity.clone(), created.id)
            .await
            .unwrap();

        assert!(service.list_items(identity).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn foreign_items_are_invisible() {
        let store = InMemoryItems::default();
        let service = service(store.clone());
        let owner = identity();
        let stranger = identity();

        let created = service
            .create_item(
                owner.clone(),
                CreateItemInput {
                    barcode: "4001234567891".to_string(),
                    product_name: "Farina 00".to_string(),
                    brand: None,
                    category: None,
                    quantity: 1,
                    unit: None,
                    expiry_date: in_days(90),
                    ingredients: None,
                    nutrition: None,
                    image_url: None,
                    suggestions: None,
                },
            )
            .await
            .unwrap();

        assert!(service.list_items(stranger.clone()).await.unwrap().is_empty());

        let result = service.delete_item(stranger, created.id).await;
        assert!(matches!(result, Err(CoreError::NotFound)));

        // The owner still sees the item untouched.
        assert_eq!(service.list_items(owner).await.unwrap().len(), 1);
    }
}
