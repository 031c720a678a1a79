use axum::{
    Router,
    routing::get,
    middleware::from_fn_with_state,
};

use tower_cookies::CookieManagerLayer;
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure};
use tracing::Level;

pub mod config;
pub mod error;
pub mod state;
pub mod db;
pub mod templates;

pub mod models {
    pub mod user;
    pub mod session;
}

pub mod repositories {
    pub mod user;
}

pub mod services {
    pub mod auth;
}

pub mod handlers {
    pub mod auth;
    pub mod home;
}

pub mod middleware_layer {
    pub mod auth;
}

use state::AppState;

/// Builds the application router: the public login routes and the guarded
/// landing page.
pub fn router(state: AppState) -> Router {
    let login_routes = Router::new()
        .route(
            "/login",
            get(handlers::auth::login_form).post(handlers::auth::login),
        )
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/", get(handlers::home::home))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware_layer::auth::require_auth,
        ))
        .with_state(state);

    Router::new()
        .merge(login_routes)
        .merge(protected_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default())
                .on_request(DefaultOnRequest::default().level(Level::DEBUG))
                .on_response(DefaultOnResponse::default().level(Level::DEBUG))
                .on_failure(DefaultOnFailure::default().level(Level::ERROR)),
        )
        .layer(CookieManagerLayer::new())
}
