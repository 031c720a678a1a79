use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use anyhow::{Context, Result};
use zeroize::{Zeroize, Zeroizing};

/// Minimum length of the cookie signing secret, in bytes.
pub const MIN_SECRET_KEY_BYTES: usize = 64;

/// Upper bound on `REMEMBER_ME_DAYS` (ten years).
pub const MAX_REMEMBER_ME_DAYS: i64 = 3650;

/// The application's configuration.
#[derive(Clone)]
pub struct Config {
    /// The path of the SQLite database file.
    pub database_path: PathBuf,
    /// The address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// How long a "remember me" session cookie lives, in days.
    pub remember_me_days: i64,
    /// Whether cookies must be marked `Secure`.
    pub secure_cookies: bool,
    /// The secret used to sign session cookies.
    pub secret_key: Zeroizing<Vec<u8>>,
}

impl Config {
    /// Creates a new `Config` from environment variables.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Config`.
    pub fn from_env() -> Result<Self> {
        let mut secret_key_hex = env::var("SECRET_KEY")
            .context("SECRET_KEY must be set (generate with: openssl rand -hex 64)")?;

        let secret_key = parse_secret_key(&secret_key_hex);
        secret_key_hex.zeroize();

        Ok(Self {
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| ".data/db.sqlite".to_string())
                .into(),
            bind_addr: env::var("BIND_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
                .parse()
                .context("Invalid BIND_ADDR")?,
            remember_me_days: parse_remember_me_days(
                &env::var("REMEMBER_ME_DAYS").unwrap_or_else(|_| "365".to_string()),
            )?,
            secure_cookies: env::var("APP_ENV")
                .map(|v| v == "production")
                .unwrap_or(false),
            secret_key: secret_key?,
        })
    }
}

/// Decodes and length-checks a hex signing secret.
pub fn parse_secret_key(secret_key_hex: &str) -> Result<Zeroizing<Vec<u8>>> {
    let bytes = Zeroizing::new(
        hex::decode(secret_key_hex.trim()).context("SECRET_KEY must be valid hexadecimal")?,
    );

    if bytes.len() < MIN_SECRET_KEY_BYTES {
        anyhow::bail!(
            "SECRET_KEY must be at least {} bytes ({} hex characters)",
            MIN_SECRET_KEY_BYTES,
            MIN_SECRET_KEY_BYTES * 2
        );
    }

    Ok(bytes)
}

/// Parses `REMEMBER_ME_DAYS`, which must lie in `1..=MAX_REMEMBER_ME_DAYS`.
pub fn parse_remember_me_days(value: &str) -> Result<i64> {
    let days: i64 = value
        .trim()
        .parse()
        .context("Invalid REMEMBER_ME_DAYS")?;

    if !(1..=MAX_REMEMBER_ME_DAYS).contains(&days) {
        anyhow::bail!(
            "REMEMBER_ME_DAYS must be between 1 and {}, got {}",
            MAX_REMEMBER_ME_DAYS,
            days
        );
    }

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_long_enough_hex_secret() {
        let secret = "ab".repeat(MIN_SECRET_KEY_BYTES);
        let key = parse_secret_key(&secret).unwrap();
        assert_eq!(key.len(), MIN_SECRET_KEY_BYTES);
        assert!(key.iter().all(|b| *b == 0xab));
    }

    #[test]
    fn rejects_short_secret() {
        let err = parse_secret_key(&hex::encode(b"mysecret!")).unwrap_err();
        assert!(err.to_string().contains("at least 64 bytes"));
    }

    #[test]
    fn accepts_remember_me_days_in_range() {
        assert_eq!(parse_remember_me_days("365").unwrap(), 365);
        assert_eq!(parse_remember_me_days("1").unwrap(), 1);
        assert_eq!(parse_remember_me_days(" 3650 ").unwrap(), MAX_REMEMBER_ME_DAYS);
    }

    #[test]
    fn rejects_remember_me_days_out_of_range() {
        let huge = (i64::MAX / 2).to_string();
        for value in ["0", "-1", "3651", huge.as_str()] {
            let err = parse_remember_me_days(value).unwrap_err();
            assert!(err.to_string().contains("between 1 and 3650"), "{}", value);
        }
        let err = parse_remember_me_days("a year").unwrap_err();
        assert!(err.to_string().contains("Invalid REMEMBER_ME_DAYS"));
    }

    #[test]
    fn rejects_non_hex_secret() {
        let err = parse_secret_key("not hex at all").unwrap_err();
        assert!(err.to_string().contains("hexadecimal"));
    }
}
