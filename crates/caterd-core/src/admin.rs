// ABOUTME: The stored admin credential record: username plus a salted one-way password hash.
// ABOUTME: Exactly one seed credential is materialized at startup; no update or delete surface exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored admin credential. Usernames are unique across the collection and
/// the hash is bcrypt output, never a plain password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl AdminUser {
    /// Build a credential record from an already-hashed password.
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
