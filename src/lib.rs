pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

pub use crate::config::AppConfig;
pub use crate::error::ApiError;

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let enable_cors = state.config.security.enable_cors;

    let router = Router::new()
        // Public
        .route("/", get(handlers::public::system::root))
        .route("/health", get(handlers::public::system::health))
        .merge(auth_public_routes())
        // Protected
        .merge(protected_routes(state.clone()))
        .with_state(state)
        // Global middleware
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

fn auth_public_routes() -> Router<AppState> {
    use handlers::public::auth;

    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use handlers::protected::{auth, categories, pets, tags};

    Router::new()
        .route("/auth/me", get(auth::whoami))
        .route("/pets", get(pets::list).post(pets::create))
        .route("/pets/:id", get(pets::get).put(pets::update).delete(pets::delete))
        .route("/pets/:id/tags", post(pets::attach_tag))
        .route("/pets/:id/tags/:tag_id", delete(pets::detach_tag))
        .route("/categories", get(categories::list).post(categories::create))
        .route("/tags", get(tags::list).post(tags::create))
        .route_layer(from_fn_with_state(state, jwt_auth_middleware))
}
