use std::env;

use anyhow::Context;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Key used to sign bearer tokens (HMAC-SHA256)
    pub token_secret: String,
    /// Lifetime of issued bearer tokens
    pub token_ttl_minutes: i64,
    pub admin_login: String,
    /// Hex-encoded SHA-256 of the administrator password
    pub admin_password_hash: String,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: parse_or("PORT", 8080)?,
            token_secret: env::var("TOKEN_SECRET").context("TOKEN_SECRET must be set")?,
            token_ttl_minutes: parse_or("TOKEN_TTL_MINUTES", 60)?,
            admin_login: env::var("ADMIN_LOGIN").unwrap_or_else(|_| "admin".to_string()),
            admin_password_hash: env::var("ADMIN_PASSWORD_HASH")
                .context("ADMIN_PASSWORD_HASH must be set")?
                .to_lowercase(),
            rate_limit_per_second: parse_or("RATE_LIMIT_PER_SECOND", 10)?,
            rate_limit_burst: parse_or("RATE_LIMIT_BURST", 50)?,
        })
    }
}

fn parse_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{} has an invalid value: {}", key, raw)),
        Err(_) => Ok(default),
    }
}
