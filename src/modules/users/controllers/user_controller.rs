use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::users::models::{RegisterRequest, RegisterResponse};
use crate::modules::users::repositories::UserRepository;

/// Register a new user and issue an auth token
/// POST /users/register
pub async fn register(
    repo: web::Data<UserRepository>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let username = request
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::missing_parameter("username"))?;

    let user = repo.register(username).await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "User registered successfully".to_string(),
        username: user.username,
        auth_token: user.auth_token,
    }))
}

/// Configure user routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/users").route("/register", web::post().to(register)));
}
