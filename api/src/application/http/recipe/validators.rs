use dispensa_core::domain::recipe::entities::RecipeIngredient;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SuggestRecipesValidator {
    #[validate(length(min = 1, message = "ingredients are required"))]
    pub ingredients: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecipeValidator {
    pub recipe_id: i64,

    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub servings: Option<i32>,

    #[serde(default)]
    pub ready_in_minutes: Option<i32>,

    #[serde(default)]
    pub source_url: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub instructions: Option<String>,

    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ingredient_list_fails_validation() {
        let payload = SuggestRecipesValidator {
            ingredients: Vec::new(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn save_requires_recipe_id() {
        let result: Result<SaveRecipeValidator, _> = serde_json::from_value(serde_json::json!({
            "title": "Easy Beef Wellington"
        }));
        assert!(result.is_err());
    }
}
