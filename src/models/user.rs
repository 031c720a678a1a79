use sqlx::FromRow;

/// Represents a user in the system.
#[derive(FromRow, Clone)]
pub struct User {
    /// The user's email address. Unique; identifies the user.
    pub email: String,
    /// The user's hashed password (Argon2 PHC string, salt embedded).
    pub password: String,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The identity the route guard resolved for the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub email: String,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self { email: user.email }
    }
}
