use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while hashing passwords or handling tokens
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Password hashing failed")]
    PasswordHash,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

/// Bearer token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

/// Issues and verifies bearer tokens for user sessions
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    expire_minutes: i64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &self.algorithm)
            .field("expire_minutes", &self.expire_minutes)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service using an HMAC secret
    pub fn new(secret: &str, algorithm: &str, expire_minutes: i64) -> Result<Self, AuthError> {
        let algorithm = Algorithm::from_str(algorithm)
            .map_err(|_| AuthError::UnsupportedAlgorithm(algorithm.to_string()))?;

        if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(AuthError::UnsupportedAlgorithm(format!("{:?}", algorithm)));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            expire_minutes,
        })
    }

    /// Issue an access token whose subject is the user id
    pub fn issue(&self, user_id: &str) -> Result<String, AuthError> {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (Utc::now() + Duration::minutes(self.expire_minutes)).timestamp(),
        };

        Ok(encode(&Header::new(self.algorithm), &claims, &self.encoding_key)?)
    }

    /// Verify a token and return the user id it was issued for
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        let validation = Validation::new(self.algorithm);
        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;

        Ok(data.claims.sub)
    }
}

/// Hash a password using Argon2id
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}
