use serde::{Deserialize, Serialize};

/// The name of the signed session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Represents a user session.
///
/// Serialized as JSON into the signed `session` cookie; the signature is the
/// only thing that makes it trustworthy, so it must never be read from an
/// unsigned jar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// The email of the user this session belongs to.
    pub email: String,
    /// Whether the cookie outlives the browser session.
    pub remember: bool,
}

impl Session {
    pub fn new(email: String, remember: bool) -> Self {
        Self { email, remember }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_only_email_and_remember_flag() {
        let session = Session::new("a@example.com".to_string(), true);
        let json = sonic_rs::to_string(&session).unwrap();
        assert_eq!(json, r#"{"email":"a@example.com","remember":true}"#);

        let decoded: Session = sonic_rs::from_str(&json).unwrap();
        assert_eq!(decoded, session);
    }
}
