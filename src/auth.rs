use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{Duration, Utc};
use eyre::{eyre, Result};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

/// Token lifetime. The server rejects requests past this window; a run is
/// expected to finish well within it, so there is no refresh.
const TOKEN_TTL_MINUTES: i64 = 5;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub kid: String,
    pub exp: i64,
}

/// Mint the short-lived bearer token from the credential pair. The secret
/// arrives base64-encoded; the decoded bytes are the HS256 signing key.
pub fn generate_token(kid: &str, secret_b64: &str) -> Result<String> {
    let secret = STANDARD
        .decode(secret_b64)
        .map_err(|e| eyre!("❌ Errore nel decodificare il secret: {e}"))?;

    let claims = Claims {
        kid: kid.to_string(),
        exp: (Utc::now() + Duration::minutes(TOKEN_TTL_MINUTES)).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(&secret),
    )
    .map_err(|e| eyre!("❌ Errore nella generazione del token: {e}"))
}
