pub mod saved_recipe_repository;

pub use saved_recipe_repository::PostgresSavedRecipeRepository;
