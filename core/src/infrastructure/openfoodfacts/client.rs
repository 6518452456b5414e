use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    inventory::entities::{DEFAULT_UNIT, NutritionInfo},
    product::{
        entities::ProductDescriptor,
        ports::ProductLookup,
        services::{NOT_AVAILABLE, normalize_category},
    },
};

const REQUESTED_FIELDS: &str = "code,product_name,product_name_it,brands,categories,categories_tags,ingredients_text,ingredients_text_it,nutriments,image_front_url,quantity";

/// Client for the OpenFoodFacts product database.
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    status: Option<i64>,
    product: Option<OffProduct>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OffProduct {
    code: Option<String>,
    product_name: Option<String>,
    product_name_it: Option<String>,
    brands: Option<String>,
    categories: Option<String>,
    categories_tags: Vec<String>,
    ingredients_text: Option<String>,
    ingredients_text_it: Option<String>,
    nutriments: Option<Nutriments>,
    image_front_url: Option<String>,
    quantity: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Nutriments {
    #[serde(rename = "energy_100g")]
    energy_100g: Option<f64>,
    #[serde(rename = "energy-kcal_100g")]
    energy_kcal_100g: Option<f64>,
    proteins_100g: Option<f64>,
    fat_100g: Option<f64>,
    carbohydrates_100g: Option<f64>,
    salt_100g: Option<f64>,
}

impl OpenFoodFactsClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    fn shape(&self, barcode: &str, product: OffProduct) -> ProductDescriptor {
        let nutrition = product
            .nutriments
            .map(|n| NutritionInfo {
                // The kJ figure wins when both are reported.
                energy: n.energy_100g.or(n.energy_kcal_100g),
                protein: n.proteins_100g,
                fat: n.fat_100g,
                carbs: n.carbohydrates_100g,
                salt: n.salt_100g,
            })
            .unwrap_or_default();

        ProductDescriptor {
            barcode: product.code.unwrap_or_else(|| barcode.to_string()),
            // Italian naming first, then the default-language fallback.
            product_name: product
                .product_name_it
                .or(product.product_name)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "Sconosciuto".to_string()),
            brand: product
                .brands
                .filter(|brands| !brands.is_empty())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            category: normalize_category(&product.categories_tags, product.categories.as_deref()),
            ingredients: product
                .ingredients_text_it
                .or(product.ingredients_text)
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| "Non disponibili".to_string()),
            nutrition,
            image_url: product.image_front_url,
            quantity: 1,
            unit: product
                .quantity
                .filter(|unit| !unit.is_empty())
                .unwrap_or_else(|| DEFAULT_UNIT.to_string()),
        }
    }
}

impl ProductLookup for OpenFoodFactsClient {
    async fn lookup(&self, barcode: &str) -> Result<Option<ProductDescriptor>, CoreError> {
        let url = format!("{}/api/v2/product/{}", self.base_url, barcode);

        let response = self
            .client
            .get(&url)
            .query(&[("fields", REQUESTED_FIELDS), ("lc", "it")])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Product lookup request failed: {}", e);
                CoreError::ExternalServiceError(format!("product database error: {e}"))
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Product lookup returned {}", status);
            return Err(CoreError::ExternalServiceError(format!(
                "product database returned {status}"
            )));
        }

        let body: LookupResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse product lookup response: {}", e);
            CoreError::ExternalServiceError(format!("invalid product database response: {e}"))
        })?;

        if body.status == Some(0) {
            return Ok(None);
        }

        Ok(body.product.map(|product| self.shape(barcode, product)))
    }
}
