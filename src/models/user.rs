use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A user row as stored in the database. The password field holds the bcrypt
/// hash, never a plaintext password.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// The user record as returned by the API: everything except the password
/// hash and the id.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserProfile {
    pub email: String,
    pub created_at: DateTime<Utc>,
}
