use axum::{
    Router,
    routing::{get, post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    get_me::{__path_get_me, get_me},
    get_notification_settings::{__path_get_notification_settings, get_notification_settings},
    login::{__path_login, login},
    register::{__path_register, register},
    update_notification_settings::{
        __path_update_notification_settings, update_notification_settings,
    },
    update_profile::{__path_update_profile, update_profile},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    register,
    login,
    get_me,
    update_profile,
    get_notification_settings,
    update_notification_settings
))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/auth/register"), post(register))
        .route(&format!("{root_path}/auth/login"), post(login))
        .route(&format!("{root_path}/auth/me"), get(get_me))
        .route(&format!("{root_path}/auth/profile"), put(update_profile))
        .route(
            &format!("{root_path}/auth/notifications"),
            get(get_notification_settings).put(update_notification_settings),
        )
}
