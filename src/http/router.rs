use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::rounds::HashMapRoundsStorage;
use crate::{health, http::cors, http::middleware, map, rounds};
use axum::{
    routing::{any, get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext<HashMapRoundsStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let map_routes = Router::new().route("/config", get(map::handlers::config));
    let rounds_routes = Router::new()
        .route("/", post(rounds::handlers::round::create))
        .route("/:round-id", get(rounds::handlers::round::status))
        .route(
            "/:round-id/save-guess",
            post(rounds::handlers::round::save_guess),
        )
        .route(
            "/:round-id/submit-guess",
            post(rounds::handlers::round::submit_guess),
        )
        .route("/:round-id/ws", any(rounds::handlers::ws::ws));

    Router::new()
        .nest("/health", health_routes)
        .nest("/map", map_routes)
        .nest("/rounds", rounds_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(middleware::log_requests))
}
