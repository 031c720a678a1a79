use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use base64::{Engine as _, engine::general_purpose};
use serde::Deserialize;
use tower_cookies::{Cookie, Cookies};
use tower_cookies::cookie::{time::Duration, SameSite};

use crate::{
    error::{AppError, Result},
    models::session::{Session, SESSION_COOKIE},
    services::auth as auth_service,
    state::AppState,
    templates,
};

/// The login form submission.
///
/// Every field is optional: a missing email or password simply fails to
/// match, it is not a separate error.
#[derive(Deserialize, Default)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
    pub remember_me: Option<String>,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

impl LoginForm {
    /// "Remember me" counts as set when the field is present and non-empty.
    pub fn remember(&self) -> bool {
        self.remember_me.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// Builds the session cookie.
///
/// Without `max_age_days` the cookie lives until the browser closes.
fn create_session_cookie(value: String, max_age_days: Option<i64>, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, value);

    cookie.set_http_only(true);
    cookie.set_secure(secure);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");

    if let Some(days) = max_age_days {
        cookie.set_max_age(Duration::days(days));
    }

    cookie
}

/// Serves the login form.
pub async fn login_form() -> Html<String> {
    Html(templates::login_page(None))
}

/// Handles a login form submission.
///
/// On success the session cookie is set and the browser is sent to `/`.
/// A failed check comes back as `AppError::Authentication`, which renders
/// the form again with the error message. A body that does not decode as a
/// form is treated as an empty submission.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    form: std::result::Result<Form<LoginForm>, FormRejection>,
) -> Result<Response> {
    let payload = match form {
        Ok(Form(payload)) => payload,
        Err(e) => {
            tracing::debug!("Undecodable login form: {}", e);
            LoginForm::default()
        }
    };

    tracing::info!("Login attempt - Payload: {:?}", payload);

    let remember = payload.remember();
    let email = payload.email.as_deref().unwrap_or_default();
    let password = payload.password.as_deref().unwrap_or_default();

    let user = auth_service::authenticate_user(&state.db, email, password).await?;

    let session = Session::new(user.email, remember);
    let session_json = sonic_rs::to_string(&session)
        .map_err(|e| AppError::Internal(format!("Session serialization failed: {}", e)))?;

    let session_cookie = create_session_cookie(
        general_purpose::URL_SAFE_NO_PAD.encode(session_json),
        remember.then_some(state.config.remember_me_days),
        state.config.secure_cookies,
    );
    cookies.signed(&state.cookie_key).add(session_cookie);

    tracing::info!("User logged in: {} (remember: {})", session.email, remember);

    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]).into_response())
}
