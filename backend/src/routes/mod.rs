use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::commands;
use crate::middleware::{auth::auth_middleware, response::wrap_response_middleware};
use crate::state::AppState;

pub mod auth;
pub mod communication;
pub mod customer;
pub mod dashboard;
pub mod finance;
pub mod logistics;
pub mod records;
pub mod supply;
pub mod workforce;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(commands::system::root))
        .route("/api/ping", get(commands::system::ping))
        .merge(auth::router())
        .merge(dashboard::router())
        .merge(supply::router())
        .merge(workforce::router())
        .merge(logistics::router())
        .merge(finance::router())
        .merge(communication::router())
        .merge(customer::router())
}

/// The full application: routes, session gate, response envelope and CORS.
pub fn build_app(state: AppState) -> Router {
    create_router()
        .layer(from_fn_with_state(state.clone(), auth_middleware))
        .layer(from_fn(wrap_response_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
