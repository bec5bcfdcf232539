use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::middleware::auth::AuthedUser;
use crate::modules::providers::models::CreateProviderRequest;
use crate::modules::providers::repositories::ProviderRepository;

/// List the caller's provider configurations
/// GET /providers
pub async fn list_providers(
    repo: web::Data<ProviderRepository>,
    user: AuthedUser,
) -> Result<HttpResponse, AppError> {
    let configs = repo.list_for_user(user.0).await?;
    Ok(HttpResponse::Ok().json(configs))
}

/// Store a new provider configuration
/// POST /providers
pub async fn add_provider(
    repo: web::Data<ProviderRepository>,
    user: AuthedUser,
    request: web::Json<CreateProviderRequest>,
) -> Result<HttpResponse, AppError> {
    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::missing_parameter("name"))?;
    let provider_type = request
        .provider_type
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::missing_parameter("type"))?;

    let id = repo
        .insert(
            user.0,
            name,
            provider_type,
            &request.public_key,
            &request.secret_key,
            &request.token,
        )
        .await?;

    tracing::info!(
        user_id = user.0,
        config_id = id,
        provider = provider_type,
        "Provider configuration saved"
    );

    Ok(HttpResponse::Created().json(serde_json::json!({
        "id": id,
        "message": "Configuration saved successfully",
    })))
}

/// Activate one configuration, deactivating the caller's others
/// POST /providers/{id}/activate
pub async fn activate_provider(
    repo: web::Data<ProviderRepository>,
    user: AuthedUser,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let config_id = path.into_inner();
    repo.set_active(user.0, config_id).await?;

    tracing::info!(user_id = user.0, config_id, "Provider configuration activated");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Configuration {config_id} activated"),
    })))
}

/// Configure provider routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/providers")
            .route("", web::get().to(list_providers))
            .route("", web::post().to(add_provider))
            .route("/{id}/activate", web::post().to(activate_provider)),
    );
}
