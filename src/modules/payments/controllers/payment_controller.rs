use std::sync::Arc;

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::error::AppError;
use crate::middleware::auth::AuthedUser;
use crate::modules::payments::services::PaymentDispatcher;

/// Payment creation payload
#[derive(Debug, Deserialize)]
pub struct CreatePixRequest {
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub amount: Option<Decimal>,
}

/// Query parameters for the status endpoint
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub transaction_id: Option<String>,
}

/// Create a PIX payment through the caller's active provider
/// POST /pix
pub async fn create_pix(
    dispatcher: web::Data<Arc<PaymentDispatcher>>,
    user: AuthedUser,
    request: web::Json<CreatePixRequest>,
) -> Result<HttpResponse, AppError> {
    let amount = request
        .amount
        .ok_or_else(|| AppError::missing_parameter("amount"))?;

    let result = dispatcher.create_payment(user.0, amount).await?;

    Ok(HttpResponse::Ok().json(result))
}

/// Check the status of a PIX payment
/// GET /pix/status?transaction_id=...
pub async fn check_pix_status(
    dispatcher: web::Data<Arc<PaymentDispatcher>>,
    user: AuthedUser,
    query: web::Query<StatusQuery>,
) -> Result<HttpResponse, AppError> {
    let result = dispatcher
        .check_payment(user.0, query.transaction_id.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(result))
}

/// Configure payment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/pix")
            .route("", web::post().to(create_pix))
            .route("/status", web::get().to(check_pix_status)),
    );
}
