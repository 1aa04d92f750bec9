use crate::domain::admin::{AdminUser, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenDto {
    pub token: String,
    #[serde(with = "serde_time")]
    pub issued_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// The verified principal attached to an authenticated request. Produced
/// once at token verification time and passed explicitly to whatever needs
/// it; handlers never look at raw claims.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// What goes into a freshly issued token.
#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl TokenSubject {
    pub fn from_admin(user: &AdminUser) -> Self {
        Self {
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminUserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<AdminUser> for AdminUserDto {
    fn from(user: AdminUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminProfileDto {
    pub user: AdminUserDto,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

impl AdminProfileDto {
    pub fn from_claims(auth: &AuthenticatedUser) -> Self {
        let expires_in = auth
            .expires_at
            .signed_duration_since(Utc::now())
            .num_seconds()
            .max(0);

        Self {
            user: AdminUserDto {
                id: auth.id,
                name: auth.name.clone(),
                email: auth.email.clone(),
                role: auth.role,
            },
            expires_at: auth.expires_at,
            expires_in,
        }
    }
}
