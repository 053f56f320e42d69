use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Header, Validation, decode, decode_header};
use once_cell::sync::Lazy;
use poem::Request;
use poem::http::header::AUTHORIZATION;
use serde::Deserialize;

use business::domain::shared::value_objects::UserId;

use crate::config::firebase_config::FirebaseConfig;

const GOOGLE_CERTS_URL: &str =
    "https://www.googleapis.com/robot/v1/metadata/x509/securetoken@system.gserviceaccount.com";
const CACHE_TTL: Duration = Duration::from_secs(3600);

/// Resolves the caller of a request.
///
/// Returns `None` when the caller cannot be identified; denial is decided by
/// the use case so every outcome shares the same response envelope.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn identify(&self, bearer_token: Option<&str>) -> Option<UserId>;
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[derive(Debug, Deserialize)]
struct FirebaseClaims {
    sub: String,
}

struct CachedCerts {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Instant,
}

static CERTS_CACHE: Lazy<RwLock<Option<CachedCerts>>> = Lazy::new(|| RwLock::new(None));

async fn fetch_google_certs() -> Result<HashMap<String, DecodingKey>, String> {
    let response: HashMap<String, String> = reqwest::get(GOOGLE_CERTS_URL)
        .await
        .map_err(|e| format!("auth.certs_fetch_failed: {e}"))?
        .json()
        .await
        .map_err(|e| format!("auth.certs_parse_failed: {e}"))?;

    let mut keys = HashMap::new();
    for (kid, pem) in response {
        let key = DecodingKey::from_rsa_pem(pem.as_bytes())
            .map_err(|e| format!("auth.cert_decode_failed: {e}"))?;
        keys.insert(kid, key);
    }

    Ok(keys)
}

async fn refresh_decoding_keys() -> Result<(), String> {
    {
        let cache = CERTS_CACHE
            .read()
            .map_err(|e| format!("auth.cache_read_failed: {e}"))?;
        if let Some(cached) = cache.as_ref()
            && cached.fetched_at.elapsed() < CACHE_TTL
        {
            return Ok(());
        }
    }

    let keys = fetch_google_certs().await?;

    let mut cache = CERTS_CACHE
        .write()
        .map_err(|e| format!("auth.cache_write_failed: {e}"))?;
    *cache = Some(CachedCerts {
        keys,
        fetched_at: Instant::now(),
    });

    Ok(())
}

/// Validates the token against the cached certificates. Callers refresh the
/// cache first.
fn extract_uid_from_token(token: &str, project_id: &str, issuer: &str) -> Result<String, String> {
    let header: Header =
        decode_header(token).map_err(|e| format!("auth.invalid_token_header: {e}"))?;

    let kid = header.kid.ok_or("auth.missing_kid")?;

    let cache = CERTS_CACHE
        .read()
        .map_err(|e| format!("auth.cache_read_failed: {e}"))?;
    let cached = cache.as_ref().ok_or("auth.certs_not_loaded")?;

    let decoding_key = cached.keys.get(&kid).ok_or("auth.unknown_kid")?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[project_id]);
    validation.set_issuer(&[issuer]);
    validation.validate_exp = true;

    let token_data = decode::<FirebaseClaims>(token, decoding_key, &validation)
        .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    Ok(token_data.claims.sub)
}

/// Firebase ID token verification
pub struct FirebaseIdentityProvider {
    project_id: String,
    issuer: String,
}

impl FirebaseIdentityProvider {
    pub fn new(config: &FirebaseConfig) -> Self {
        Self {
            project_id: config.project_id.clone(),
            issuer: config.expected_issuer(),
        }
    }
}

#[async_trait]
impl IdentityProvider for FirebaseIdentityProvider {
    async fn identify(&self, bearer_token: Option<&str>) -> Option<UserId> {
        let Some(token) = bearer_token else {
            tracing::debug!("Request carries no bearer token");
            return None;
        };

        if let Err(e) = refresh_decoding_keys().await {
            tracing::error!("Failed to fetch Google certs: {e}");
            return None;
        }

        match extract_uid_from_token(token, &self.project_id, &self.issuer) {
            Ok(uid) => Some(UserId::new(uid)),
            Err(e) => {
                tracing::warn!("Firebase auth failed: {e}");
                None
            }
        }
    }
}
