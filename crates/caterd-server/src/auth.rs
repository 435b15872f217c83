// ABOUTME: The auth gate: JWT issuance/verification, bcrypt password hashing, and the bearer middleware.
// ABOUTME: The middleware wraps the admin sub-router so no store access happens on a bad token.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tower::{Layer, Service};

/// Issued tokens expire this long after login. Verification is stateless, so
/// a token stays valid for its full lifetime regardless of restarts.
const TOKEN_TTL_HOURS: i64 = 24;

/// JWT payload: the subject username and an absolute expiry (unix seconds).
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

/// Signs and verifies access tokens with an HS256 key from configuration.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token for the given subject, expiring 24 hours out.
    pub fn issue(&self, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: username.to_string(),
            exp: (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Decode and verify signature and expiry. Tokens without a usable
    /// subject are rejected even when the signature checks out.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let claims = decode::<Claims>(token, &self.decoding, &Validation::default())?.claims;
        if claims.sub.is_empty() {
            return Err(jsonwebtoken::errors::ErrorKind::MissingRequiredClaim(
                "sub".to_string(),
            )
            .into());
        }
        Ok(claims)
    }
}

/// One-way salted hash for credential storage.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
}

/// Re-derive and compare; a malformed stored hash counts as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

/// A tower Layer that applies bearer token authentication to the routes it
/// wraps. Requests without a valid token short-circuit to 401 before any
/// handler or store access runs.
#[derive(Clone)]
pub struct AuthLayer {
    tokens: Arc<TokenService>,
}

impl AuthLayer {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthMiddleware {
            inner,
            tokens: Arc::clone(&self.tokens),
        }
    }
}

/// The middleware service that checks `Authorization: Bearer <jwt>`.
#[derive(Clone)]
pub struct AuthMiddleware<S> {
    inner: S,
    tokens: Arc<TokenService>,
}

impl<S> Service<Request<Body>> for AuthMiddleware<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let bearer = req
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(|v| v.to_string());

        let verified = bearer
            .as_deref()
            .map(|token| self.tokens.verify(token).is_ok())
            .unwrap_or(false);

        if verified {
            let mut inner = self.inner.clone();
            Box::pin(async move { inner.call(req).await })
        } else {
            Box::pin(async move {
                let body = serde_json::json!({ "error": "invalid authentication credentials" });
                let resp = Response::builder()
                    .status(StatusCode::UNAUTHORIZED)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap();
                Ok(resp)
            })
        }
    }
}
