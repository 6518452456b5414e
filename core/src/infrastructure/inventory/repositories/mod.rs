pub mod inventory_item_repository;

pub use inventory_item_repository::PostgresInventoryItemRepository;
