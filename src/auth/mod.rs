pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims};

/// Payload for a user login request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// User's email address.
    pub email: String,
    /// User's password in plaintext. Only ever compared against the stored
    /// bcrypt hash.
    pub password: String,
}

/// Payload for a new user registration request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Desired username for the new account. Must be unique.
    pub username: String,
    /// Email address for the new account. Must be unique.
    pub email: String,
    /// Password for the new account.
    pub password: String,
}

/// Response structure after a successful login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// The signed JWT to present as `Authorization: Bearer <token>`.
    #[serde(rename = "accessToken")]
    pub access_token: String,
}
