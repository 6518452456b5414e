use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts, Request, State},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use dispensa_core::domain::authentication::{ports::AuthService, value_objects::Identity};

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

fn bearer_token(value: Option<&axum::http::HeaderValue>) -> Option<&str> {
    value
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

/// Resolves the Authorization header to an [`Identity`] and stores it in the
/// request extensions. Requests without a usable token pass through; the
/// [`RequiredUser`] extractor is what actually rejects them.
pub async fn auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if let Some(token) = bearer_token(req.headers().get(AUTHORIZATION))
        && let Ok(identity) = state.service.authenticate(token.to_string()).await
    {
        req.extensions_mut().insert(identity);
    }

    Ok(next.run(req).await)
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, ApiError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| ApiError::Unauthorized("missing token".to_string()))?;

    Ok(bearer.token().to_string())
}

/// Extractor for handlers that require an authenticated caller. A missing
/// token is a 401; a token that fails verification is a 403.
pub struct RequiredUser(pub Identity);

impl<S> FromRequestParts<S> for RequiredUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
            return Ok(RequiredUser(identity));
        }

        let token = extract_token_from_bearer(parts).await?;

        let state = AppState::from_ref(state);
        let identity = state
            .service
            .authenticate(token)
            .await
            .map_err(ApiError::from)?;

        parts.extensions.insert(identity.clone());

        Ok(RequiredUser(identity))
    }
}
