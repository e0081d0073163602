//! Unverified JWT payload decoding.
//!
//! The client never validates signatures; the backend does. Claims are only
//! read for display and logging (who is signed in, when the token expires).

use std::collections::HashMap;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::error::TokenStoreError;
use crate::core::service::TokenStore;

/// Claims carried by the access token
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AccessClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl AccessClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// Tokens without `exp` never count as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|at| at <= now)
    }
}

/// Decode the payload segment of a JWT. Returns `None` for anything that is
/// not a three-segment token with a JSON payload.
pub fn decode_claims(token: &str) -> Option<AccessClaims> {
    let mut segments = token.split('.');
    let (_header, payload, _signature) = (segments.next()?, segments.next()?, segments.next()?);
    if segments.next().is_some() {
        return None;
    }

    // Some issuers keep the padding
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Read the stored access token and decode its claims.
pub async fn decode_access_token(
    tokens: &dyn TokenStore,
) -> Result<Option<AccessClaims>, TokenStoreError> {
    Ok(tokens.get_token().await?.as_deref().and_then(decode_claims))
}
