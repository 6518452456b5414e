use crate::domain::recipe::entities::RecipeIngredient;

#[derive(Debug, Clone)]
pub struct SuggestRecipesInput {
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SaveRecipeInput {
    pub recipe_id: i64,
    pub title: String,
    pub image: Option<String>,
    pub servings: Option<i32>,
    pub ready_in_minutes: Option<i32>,
    pub source_url: Option<String>,
    pub summary: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<RecipeIngredient>,
}
