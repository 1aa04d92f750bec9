// src/infrastructure/security/token.rs
use std::{sync::Arc, time::Duration};

use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::{ClockPort, security::TokenManager},
};
use crate::domain::admin::Role;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    name: String,
    email: String,
    role: Role,
    iat: i64,
    exp: i64,
}

/// HS256 tokens carrying the admin principal. Stateless: nothing to revoke,
/// expiry is the only invalidation.
pub struct JwtTokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
    clock: Arc<ClockPort>,
}

impl JwtTokenManager {
    pub fn new(secret: &str, ttl: Duration, clock: Arc<ClockPort>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
            clock,
        }
    }
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = self.clock.now();
        let ttl = chrono::Duration::from_std(self.ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let expires_at = issued_at + ttl;

        let claims = Claims {
            sub: subject.user_id.to_string(),
            name: subject.name,
            email: subject.email,
            role: subject.role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(AuthTokenDto {
            token,
            issued_at,
            expires_at,
            expires_in: ttl.num_seconds(),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| ApplicationError::unauthorized("invalid or expired token"))?;

        let claims = data.claims;
        let id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| ApplicationError::unauthorized("malformed token subject"))?;
        let issued_at = DateTime::<Utc>::from_timestamp(claims.iat, 0)
            .ok_or_else(|| ApplicationError::unauthorized("malformed token timestamps"))?;
        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or_else(|| ApplicationError::unauthorized("malformed token timestamps"))?;

        Ok(AuthenticatedUser {
            id,
            name: claims.name,
            email: claims.email,
            role: claims.role,
            issued_at,
            expires_at,
        })
    }
}
