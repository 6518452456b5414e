use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    inventory::ports::InventoryItemRepository,
    jwt::ports::TokenProvider,
    product::{
        entities::ProductLookupOutput,
        ports::{ProductLookup, ProductService},
    },
    recipe::ports::{RecipeProvider, SavedRecipeRepository},
    translation::ports::TranslationProvider,
    user::ports::UserRepository,
};

/// Placeholder shown when the database has no category for a product.
pub const NOT_AVAILABLE: &str = "N/A";

/// Picks a display category from the upstream tag list. Tags look like
/// `it:latte-e-derivati`; the Italian tag wins, otherwise the first one.
/// Falls back to the first entry of the free-text category string.
pub fn normalize_category(categories_tags: &[String], categories: Option<&str>) -> String {
    if let Some(tag) = categories_tags
        .iter()
        .find(|tag| tag.starts_with("it:"))
        .or_else(|| categories_tags.first())
    {
        let name = strip_language_prefix(tag).replace('-', " ");
        return capitalize_first(&name);
    }

    categories
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn strip_language_prefix(tag: &str) -> &str {
    match tag.split_once(':') {
        Some((prefix, rest)) if prefix.len() == 2 => rest,
        _ => tag,
    }
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Usage ideas shown alongside a lookup, keyed by category.
pub fn usage_suggestions(category: &str) -> Vec<String> {
    let suggestions: &[&str] = match category {
        "Dairy" => &[
            "Usalo nei dolci o caffè",
            "Prepara una salsa cremosa",
            "Congela per gelato fatto in casa",
        ],
        "Bakery" => &[
            "Fai pangrattato tostato",
            "Usa come miglierina per budini",
            "Prepara pani di pane",
        ],
        "Fruits" => &[
            "Prepara una marmellata",
            "Fai un succo o frullato",
            "Congela per sorbetto",
        ],
        "Vegetables" => &[
            "Fai un minestrone congelato",
            "Prepara una salsa",
            "Metti sott'olio o sottaceto",
        ],
        _ => &[
            "Controlla ricette online",
            "Dona a qualcuno",
            "Compostaggio sostenibile",
        ],
    };

    suggestions.iter().map(|s| s.to_string()).collect()
}

impl<U, I, SR, H, TK, PL, RP, TR, HC> ProductService for Service<U, I, SR, H, TK, PL, RP, TR, HC>
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
    async fn lookup_product(&self, barcode: String) -> Result<ProductLookupOutput, CoreError> {
        if barcode.is_empty() {
            return Err(CoreError::Validation("barcode is required".to_string()));
        }

        let product = self
            .product_lookup
            .lookup(&barcode)
            .await?
            .ok_or(CoreError::NotFound)?;

        let suggestions = usage_suggestions(&product.category);

        Ok(ProductLookupOutput {
            product,
            suggestions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn italian_tag_wins_over_other_languages() {
        let category = normalize_category(
            &tags(&["en:dairy-products", "it:latte-e-derivati"]),
            Some("Dairies"),
        );
        assert_eq!(category, "Latte e derivati");
    }

    #[test]
    fn first_tag_is_used_without_an_italian_one() {
        let category = normalize_category(&tags(&["en:dairy-products"]), None);
        assert_eq!(category, "Dairy products");
    }

    #[test]
    fn free_text_category_is_the_fallback() {
        let category = normalize_category(&[], Some("Snacks, Sweet snacks"));
        assert_eq!(category, "Snacks");
    }

    #[test]
    fn missing_category_becomes_placeholder() {
        assert_eq!(normalize_category(&[], None), NOT_AVAILABLE);
        assert_eq!(normalize_category(&[], Some("")), NOT_AVAILABLE);
    }

    #[test]
    fn suggestions_fall_back_to_default_set() {
        assert_eq!(usage_suggestions("Dairy").len(), 3);
        assert_eq!(
            usage_suggestions("Something else"),
            usage_suggestions(NOT_AVAILABLE)
        );
    }
}
