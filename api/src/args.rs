use clap::Parser;
use dispensa_core::domain::common::{
    AuthConfig, DatabaseConfig, DispensaConfig, ProductLookupConfig, RecipeApiConfig,
    TranslationConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "dispensa-api", about = "Dispensa pantry tracker API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub integrations: IntegrationArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 5001)]
    pub port: u16,

    #[arg(long, env = "ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    /// Comma-separated CORS origin allowlist.
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "postgres")]
    pub database_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "dispensa")]
    pub database_name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AuthArgs {
    #[arg(
        long,
        env = "JWT_SECRET",
        default_value = "dispensa_secret_change_in_production"
    )]
    pub jwt_secret: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct IntegrationArgs {
    #[arg(
        long,
        env = "OPENFOODFACTS_BASE_URL",
        default_value = "https://world.openfoodfacts.org"
    )]
    pub openfoodfacts_base_url: String,

    #[arg(
        long,
        env = "SPOONACULAR_BASE_URL",
        default_value = "https://api.spoonacular.com"
    )]
    pub spoonacular_base_url: String,

    #[arg(long, env = "SPOONACULAR_API_KEY")]
    pub spoonacular_api_key: Option<String>,

    #[arg(long, env = "TRANSLATION_CACHE_CAPACITY", default_value_t = 1024)]
    pub translation_cache_capacity: usize,
}

impl From<&Args> for DispensaConfig {
    fn from(args: &Args) -> Self {
        DispensaConfig {
            database: DatabaseConfig {
                host: args.database.database_host.clone(),
                port: args.database.database_port,
                username: args.database.database_user.clone(),
                password: args.database.database_password.clone(),
                name: args.database.database_name.clone(),
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret.clone(),
            },
            product_lookup: ProductLookupConfig {
                base_url: args.integrations.openfoodfacts_base_url.clone(),
            },
            recipes: RecipeApiConfig {
                base_url: args.integrations.spoonacular_base_url.clone(),
                api_key: args.integrations.spoonacular_api_key.clone(),
            },
            translation: TranslationConfig {
                cache_capacity: args.integrations.translation_cache_capacity,
            },
        }
    }
}
