//! Access tokens
//!
//! A token is `base64url(json claims) "." hex(hmac_sha256(secret, payload))`.
//! Claims carry the subject and an expiry as a unix timestamp.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Login the token was issued to
    pub sub: String,
    /// Expiry, seconds since the unix epoch
    pub exp: i64,
}

impl Claims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Hash a secret for storage and comparison
pub fn hash_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

fn mac(secret: &str) -> Result<HmacSha256, AuthError> {
    HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| AuthError::InvalidSignature)
}

/// Issue a token for `subject` valid for `ttl` from `now`
pub fn issue_token(
    subject: &str,
    secret: &str,
    ttl: Duration,
    now: DateTime<Utc>,
) -> Result<(String, Claims), AuthError> {
    let claims = Claims {
        sub: subject.to_string(),
        exp: (now + ttl).timestamp(),
    };
    let json = serde_json::to_vec(&claims).map_err(|_| AuthError::MalformedToken)?;
    let payload = URL_SAFE_NO_PAD.encode(json);

    let mut mac = mac(secret)?;
    mac.update(payload.as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());

    Ok((format!("{}.{}", payload, signature), claims))
}

/// Check the signature and expiry of a token and return its claims
pub fn verify_token(token: &str, secret: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
    let (payload, signature) = token.split_once('.').ok_or(AuthError::MalformedToken)?;
    let signature = hex::decode(signature).map_err(|_| AuthError::MalformedToken)?;

    let mut mac = mac(secret)?;
    mac.update(payload.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| AuthError::InvalidSignature)?;

    let json = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| AuthError::MalformedToken)?;
    let claims: Claims = serde_json::from_slice(&json).map_err(|_| AuthError::MalformedToken)?;

    if claims.exp <= now.timestamp() {
        return Err(AuthError::Expired);
    }
    Ok(claims)
}
