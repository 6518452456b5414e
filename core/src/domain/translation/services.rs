use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::{
    common::services::Service,
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    inventory::ports::InventoryItemRepository,
    jwt::ports::TokenProvider,
    product::ports::ProductLookup,
    recipe::ports::{RecipeProvider, SavedRecipeRepository},
    translation::ports::{TranslationProvider, TranslationService},
    user::ports::UserRepository,
};

const TARGET_LANG: &str = "it";

/// Fixed translations for ingredient names and recipe titles that come back
/// from the recipe database over and over. Checked before the provider so the
/// common cases never leave the process.
static DICTIONARY: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("prosciutto", "prosciutto"),
        ("ham", "prosciutto"),
        ("pancetta", "pancetta"),
        ("proscuitto", "prosciutto"),
        ("biscuit type crackers", "cracker tipo biscotto"),
        ("fig jam", "marmellata di fichi"),
        ("figs", "fichi"),
        ("brie cheese", "formaggio brie"),
        ("muffins", "muffin"),
        ("pear", "pera"),
        ("creamy goat cheese", "formaggio caprino cremoso"),
        ("basil", "basilico"),
        ("thyme", "timo"),
        ("juice of lemon", "succo di limone"),
        ("chicken thighs", "cosce di pollo"),
        ("shells", "conchiglie"),
        ("ricotta cheese", "ricotta"),
        ("egg", "uovo"),
        ("tomato sauce", "salsa di pomodoro"),
        ("several basil leaves", "diverse foglie di basilico"),
        ("sized cantaloupe", "melone"),
        ("chicken stock", "brodo di pollo"),
        ("onion", "cipolla"),
        ("mushrooms", "funghi"),
        ("dijon mustard", "senape di digione"),
        ("puff pastry", "pasta sfoglia"),
        ("egg yolks", "tuorli d'uovo"),
        ("pork cutlets", "cotolette di maiale"),
        ("sage leaves", "foglie di salvia"),
        ("butter", "burro"),
        ("lemon juice", "succo di limone"),
        ("toasty bread", "pane tostato"),
        ("garlic", "aglio"),
        ("radicchio", "radicchio"),
        ("endive", "indivia"),
        ("olive oil", "olio d'oliva"),
        ("pistachio nuts", "pistacchi"),
        ("honey", "miele"),
        ("white peppercorns cracked", "pepe bianco macinato"),
        ("peppercorns cracked", "pepe macinato"),
        ("shaved prosciutto", "prosciutto a fette"),
        ("small jar", "barattolo piccolo"),
        ("ounces", "once"),
        ("ounce", "oncia"),
        (
            "goat cheese, fig and proscuitto crostini",
            "crostini di formaggio di capra, fichi e prosciutto",
        ),
        (
            "grilled figs with brie and prosciutto",
            "fichi grigliati con brie e prosciutto",
        ),
        (
            "broiled pear and prosciutto toasts",
            "toast con pere e prosciutto alla griglia",
        ),
        (
            "chicken thighs wrapped in prosciutto",
            "cosce di pollo avvolte nel prosciutto",
        ),
        (
            "pasta shells with ricotta cheese stuffing",
            "conchiglie di pasta con ripieno di ricotta",
        ),
        (
            "cantaloupe soup with crispy ham and basil",
            "zuppa di melone con prosciutto croccante e basilico",
        ),
        ("easy beef wellington", "manzo wellington facile"),
        (
            "mouthwatering grilled saltimbocca",
            "saltimbocca alla griglia deliziosi",
        ),
        (
            "savory radicchio and prosciutto crostini topped with sweet syrupy sapa",
            "crostini salati con radicchio e prosciutto conditi con sapa dolce sciroppata",
        ),
        (
            "roasted endive salad with prosciutto, figs and pistachios",
            "insalata di indivia arrosto con prosciutto, fichi e pistacchi",
        ),
    ])
});

pub fn dictionary_lookup(text: &str) -> Option<&'static str> {
    DICTIONARY.get(text.to_lowercase().trim()).copied()
}

impl<U, I, SR, H, TK, PL, RP, TR, HC> TranslationService
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
    async fn translate_to_italian(&self, text: String) -> String {
        if text.is_empty() {
            return text;
        }

        if let Some(fixed) = dictionary_lookup(&text) {
            return fixed.to_string();
        }

        match self.translation_provider.translate(&text, TARGET_LANG).await {
            Ok(translated) => translated,
            Err(err) => {
                tracing::debug!("translation fallback to source text: {}", err);
                text
            }
        }
    }

    async fn translate_all(&self, texts: Vec<String>) -> Vec<String> {
        futures::future::join_all(
            texts
                .into_iter()
                .map(|text| self.translate_to_italian(text)),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::entities::app_errors::CoreError,
        crypto::ports::MockHasherRepository,
        health::ports::MockHealthCheckRepository,
        inventory::ports::MockInventoryItemRepository,
        jwt::ports::MockTokenProvider,
        product::ports::MockProductLookup,
        recipe::ports::{MockRecipeProvider, MockSavedRecipeRepository},
        translation::ports::MockTranslationProvider,
        user::ports::MockUserRepository,
    };

    fn service(
        provider: MockTranslationProvider,
    ) -> Service<
        MockUserRepository,
        MockInventoryItemRepository,
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
            MockInventoryItemRepository::new(),
            MockSavedRecipeRepository::new(),
            MockHasherRepository::new(),
            MockTokenProvider::new(),
            MockProductLookup::new(),
            MockRecipeProvider::new(),
            provider,
            MockHealthCheckRepository::new(),
        )
    }

    #[tokio::test]
    async fn dictionary_hits_skip_the_provider() {
        // No expectations on the provider: calling it would panic.
        let service = service(MockTranslationProvider::new());

        let translated = service.translate_to_italian("Fig Jam".to_string()).await;
        assert_eq!(translated, "marmellata di fichi");
    }

    #[tokio::test]
    async fn provider_failure_returns_source_text() {
        let mut provider = MockTranslationProvider::new();
        provider.expect_translate().returning(|_, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("down".to_string())) })
        });
        let service = service(provider);

        let translated = service
            .translate_to_italian("persimmon pudding".to_string())
            .await;
        assert_eq!(translated, "persimmon pudding");
    }

    #[tokio::test]
    async fn translate_all_keeps_order() {
        let mut provider = MockTranslationProvider::new();
        provider
            .expect_translate()
            .returning(|text, _| Box::pin(async move { Ok(format!("{text} (it)")) }));
        let service = service(provider);

        let translated = service
            .translate_all(vec!["ham".to_string(), "persimmon".to_string()])
            .await;
        assert_eq!(translated, vec!["prosciutto", "persimmon (it)"]);
    }
}
