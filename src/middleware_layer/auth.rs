use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use base64::{Engine as _, engine::general_purpose};
use tower_cookies::{Cookie, Cookies};

use crate::{
    error::{AppError, Result},
    models::{
        session::{Session, SESSION_COOKIE},
        user::CurrentUser,
    },
    repositories::user as user_repo,
    state::AppState,
};

/// Reads and decodes the session from the signed cookie jar.
///
/// # Returns
///
/// `None` if the cookie is absent, carries a bad signature, or does not decode.
pub fn extract_session(cookies: &Cookies, state: &AppState) -> Option<Session> {
    let cookie = cookies.signed(&state.cookie_key).get(SESSION_COOKIE)?;

    let json = general_purpose::URL_SAFE_NO_PAD
        .decode(cookie.value())
        .map_err(|e| tracing::warn!("Session cookie is not base64: {}", e))
        .ok()?;

    sonic_rs::from_slice::<Session>(&json)
        .map_err(|e| tracing::warn!("Invalid session JSON: {}", e))
        .ok()
}

/// Drops a session cookie the guard could not resolve.
fn clear_session_cookie(cookies: &Cookies) {
    if cookies.get(SESSION_COOKIE).is_some() {
        let mut cookie = Cookie::new(SESSION_COOKIE, "");
        cookie.set_path("/");
        cookies.remove(cookie);
    }
}

/// A middleware that requires a valid session to be present.
///
/// Resolves the session's email to a stored user and exposes it to handlers
/// as a `CurrentUser` extension. Anything short of that redirects to the
/// login form.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `cookies` - The request cookies.
/// * `request` - The incoming request.
/// * `next` - The next middleware in the chain.
pub async fn require_auth(
    State(state): State<AppState>,
    cookies: Cookies,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response> {
    tracing::debug!("Checking authentication...");

    let Some(session) = extract_session(&cookies, &state) else {
        tracing::debug!("No valid session cookie found");
        clear_session_cookie(&cookies);
        return Err(AppError::Unauthorized);
    };

    let Some(user) = user_repo::find_by_email(&state.db, &session.email).await? else {
        tracing::warn!("Session refers to unknown user: {}", session.email);
        clear_session_cookie(&cookies);
        return Err(AppError::Unauthorized);
    };

    tracing::debug!("User authenticated: {}", user.email);

    request.extensions_mut().insert(CurrentUser::from(user));

    Ok(next.run(request).await)
}
