use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{RecipeDetail, RecipeIngredient, RecipeSummary},
        ports::RecipeProvider,
    },
};

/// How many candidates an ingredient search asks for.
const SUGGESTION_COUNT: u32 = 10;
/// Ranking 2 maximizes used ingredients over missing ones.
const RANKING_MAXIMIZE_USED: u32 = 2;

/// Client for the Spoonacular recipe API.
#[derive(Debug, Clone)]
pub struct SpoonacularClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FindByIngredientsEntry {
    id: i64,
    title: String,
    image: Option<String>,
    #[serde(default)]
    used_ingredient_count: i32,
    #[serde(default)]
    missed_ingredient_count: i32,
    #[serde(default)]
    used_ingredients: Vec<IngredientRef>,
    #[serde(default)]
    missed_ingredients: Vec<IngredientRef>,
}

#[derive(Debug, Deserialize)]
struct IngredientRef {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InformationResponse {
    id: i64,
    title: String,
    image: Option<String>,
    servings: Option<i32>,
    ready_in_minutes: Option<i32>,
    source_url: Option<String>,
    summary: Option<String>,
    instructions: Option<String>,
    #[serde(default)]
    extended_ingredients: Vec<ExtendedIngredient>,
}

#[derive(Debug, Deserialize)]
struct ExtendedIngredient {
    name: String,
    amount: Option<f64>,
    unit: Option<String>,
    original: Option<String>,
}

impl SpoonacularClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            base_url,
            api_key,
            client: Client::new(),
        }
    }

    fn api_key(&self) -> Result<&str, CoreError> {
        self.api_key.as_deref().ok_or_else(|| {
            CoreError::ExternalServiceError("recipe API key is not configured".to_string())
        })
    }
}

impl RecipeProvider for SpoonacularClient {
    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<RecipeSummary>, CoreError> {
        let api_key = self.api_key()?;
        let url = format!("{}/recipes/findByIngredients", self.base_url);
        let ingredient_list = ingredients.join(",");
        let number = SUGGESTION_COUNT.to_string();
        let ranking = RANKING_MAXIMIZE_USED.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("apiKey", api_key),
                ("ingredients", ingredient_list.as_str()),
                ("number", number.as_str()),
                ("ranking", ranking.as_str()),
                ("ignorePantry", "true"),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Recipe search request failed: {}", e);
                CoreError::ExternalServiceError(format!("recipe API error: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Recipe search returned {}: {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "recipe API returned {status}"
            )));
        }

        let entries: Vec<FindByIngredientsEntry> = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse recipe search response: {}", e);
            CoreError::ExternalServiceError(format!("invalid recipe API response: {e}"))
        })?;

        Ok(entries
            .into_iter()
            .map(|entry| RecipeSummary {
                id: entry.id,
                title: entry.title,
                image: entry.image,
                used_ingredient_count: entry.used_ingredient_count,
                missed_ingredient_count: entry.missed_ingredient_count,
                used_ingredients: entry
                    .used_ingredients
                    .into_iter()
                    .map(|ingredient| ingredient.name)
                    .collect(),
                missed_ingredients: entry
                    .missed_ingredients
                    .into_iter()
                    .map(|ingredient| ingredient.name)
                    .collect(),
            })
            .collect())
    }

    async fn get_information(&self, recipe_id: i64) -> Result<RecipeDetail, CoreError> {
        let api_key = self.api_key()?;
        let url = format!("{}/recipes/{}/information", self.base_url, recipe_id);

        let response = self
            .client
            .get(&url)
            .query(&[("apiKey", api_key), ("includeNutrition", "false")])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Recipe detail request failed: {}", e);
                CoreError::ExternalServiceError(format!("recipe API error: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Recipe detail returned {}", status);
            return Err(CoreError::ExternalServiceError(format!(
                "recipe API returned {status}"
            )));
        }

        let detail: InformationResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse recipe detail response: {}", e);
            CoreError::ExternalServiceError(format!("invalid recipe API response: {e}"))
        })?;

        Ok(RecipeDetail {
            id: detail.id,
            title: detail.title,
            image: detail.image,
            servings: detail.servings,
            ready_in_minutes: detail.ready_in_minutes,
            source_url: detail.source_url,
            summary: detail.summary,
            instructions: detail.instructions,
            ingredients: detail
                .extended_ingredients
                .into_iter()
                .map(|ingredient| RecipeIngredient {
                    name: ingredient.name,
                    amount: ingredient.amount,
                    unit: ingredient.unit,
                    original: ingredient.original,
                })
                .collect(),
        })
    }
}
