use std::sync::Arc;

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};
use utoipa_swagger_ui::SwaggerUi;

use dispensa_core::application::create_service;
use dispensa_core::domain::common::DispensaConfig;
use dispensa_core::infrastructure::db::postgres::{Postgres, PostgresConfig};

use crate::application::http::authentication::router::authentication_routes;
use crate::application::http::health::health_routes;
use crate::application::http::inventory::router::inventory_routes;
use crate::application::http::product::router::product_routes;
use crate::application::http::recipe::router::recipe_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

/// Opens the store handle and wires the service aggregate. The returned
/// [`Postgres`] handle stays with the caller so it can be closed at shutdown.
pub async fn state(args: Arc<Args>) -> Result<(AppState, Postgres), anyhow::Error> {
    let config = DispensaConfig::from(args.as_ref());

    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.connection_url(),
    })
    .await?;

    let service = create_service(&config, &postgres);

    Ok((AppState::new(args, service), postgres))
}

/// Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let mut allowed_origins = Vec::with_capacity(state.args.server.allowed_origins.len());
    for origin in &state.args.server.allowed_origins {
        allowed_origins.push(HeaderValue::from_str(origin)?);
    }

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT])
        .allow_credentials(true);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let root_path = state.args.server.root_path.clone();

    // Handler annotations carry paths relative to the root; prefix them so
    // the docs match the mounted routes.
    let mut openapi = ApiDoc::build();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    let router = axum::Router::new()
        .merge(
            SwaggerUi::new(format!("{root_path}/swagger-ui"))
                .url(format!("{root_path}/api-docs/openapi.json"), openapi),
        )
        .merge(authentication_routes(state.clone()))
        .merge(product_routes(state.clone()))
        .merge(inventory_routes(state.clone()))
        .merge(recipe_routes(state.clone()))
        .merge(health_routes(state.clone()))
        .route(
            &format!("{root_path}/metrics"),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);

    Ok(router)
}
