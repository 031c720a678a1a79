use axum::{response::Html, Extension};

use crate::{models::user::CurrentUser, templates};

/// Serves the landing page. Only reachable through `require_auth`.
pub async fn home(Extension(user): Extension<CurrentUser>) -> Html<String> {
    tracing::debug!("Serving home page for {}", user.email);
    Html(templates::home_page())
}
