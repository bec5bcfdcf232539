use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Registered user account
///
/// Immutable after registration; the auth token is the opaque bearer
/// credential for every authenticated route.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub auth_token: String,
}

/// Registration request payload
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
}

/// Registration response payload
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub username: String,
    pub auth_token: String,
}
