use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::templates;

/// The only message a failed login ever shows.
pub const AUTHENTICATION_FAILED: &str = "Authentication failed";

/// The application's error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// A database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown email or wrong password. The two are never told apart.
    #[error("Authentication failed")]
    Authentication,

    /// No valid session on a protected page.
    #[error("Authorization failed")]
    Unauthorized,

    /// A stored hash that cannot be parsed, or a hasher failure.
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// An internal server error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// A `Result` type that uses `AppError` as the error type.
pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Authentication => {
                tracing::warn!("Authentication failed");
                (
                    StatusCode::OK,
                    Html(templates::login_page(Some(AUTHENTICATION_FAILED))),
                )
                    .into_response()
            }

            AppError::Unauthorized => {
                tracing::debug!("No valid session, redirecting to login");
                (StatusCode::FOUND, [(header::LOCATION, "/login")]).into_response()
            }

            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                server_error()
            }

            AppError::Io(ref e) => {
                tracing::error!("IO error: {}", e);
                server_error()
            }

            AppError::PasswordHash(ref msg) => {
                tracing::error!("Password hash error: {}", msg);
                server_error()
            }

            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                server_error()
            }
        }
    }
}

fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(templates::server_error_page()),
    )
        .into_response()
}
