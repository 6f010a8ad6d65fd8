pub mod extractors;
pub mod password;
pub mod token;

use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ApiError;

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims};

/// The `{email, password}` payload shared by registration and login.
///
/// Both fields are optional at the deserialization layer so that presence is
/// checked in the handler and reported as a precise 400, matching the API's
/// stable error messages rather than a framework-generated parse failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    /// The email, or 400 "Email is required" when absent or empty.
    pub fn email(&self) -> Result<&str, ApiError> {
        self.email
            .as_deref()
            .filter(|email| !email.is_empty())
            .ok_or_else(|| ApiError::BadRequest("Email is required".into()))
    }

    /// The password, or 400 "Password is required" when absent or empty.
    pub fn password(&self) -> Result<&str, ApiError> {
        self.password
            .as_deref()
            .filter(|password| !password.is_empty())
            .ok_or_else(|| ApiError::BadRequest("Password is required".into()))
    }
}
