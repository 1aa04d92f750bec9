// src/domain/admin/mod.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Access level attached to a directory entry and carried in token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
}

/// An operator allowed through the admin gate. Entries come from
/// configuration, not from the store.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Lookup over the configured set of admin users. Email comparison is
/// case-insensitive.
pub trait AdminDirectory: Send + Sync {
    fn find_by_email(&self, email: &str) -> Option<AdminUser>;
}
