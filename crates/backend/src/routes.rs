use std::path::Path;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{any, get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::shared::config::Config;
use crate::shared::upstream::Upstream;
use crate::system;
use crate::system::auth::jwt::SessionKeys;

/// Shared state of every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: Upstream,
    pub keys: SessionKeys,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let upstream = Upstream::new(&config.upstream)?;
        let keys = SessionKeys::new(&config.session.resolve_secret(), config.session.ttl_hours);
        Ok(Self {
            config: Arc::new(config),
            upstream,
            keys,
        })
    }
}

/// All gateway routes plus the SPA fallback
pub fn configure_routes(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/auth/login", post(system::handlers::auth::login))
        .route("/api/auth/logout", post(system::handlers::auth::logout))
        .route(
            "/api/recovery-password",
            post(system::handlers::auth::recovery_password),
        );

    let protected = Router::new()
        .route("/api/auth/me", get(system::handlers::auth::me))
        .route("/api/*path", any(system::handlers::proxy::forward))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            system::auth::middleware::require_session,
        ));

    let static_dir = Path::new(&state.config.server.static_dir);
    // Client-side routes resolve to index.html
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    public
        .merge(protected)
        .fallback_service(spa)
        .with_state(state)
}
