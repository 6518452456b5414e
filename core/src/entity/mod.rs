pub mod inventory_items;
pub mod saved_recipes;
pub mod users;
