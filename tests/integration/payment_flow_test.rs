// Integration tests for dispatcher failure paths that depend on stored
// state. Needs a live PostgreSQL instance; all tests are #[ignore]d.
//
// None of these reach a gateway: each fails before the outbound call.

#[path = "../helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;

use std::sync::Arc;

use helpers::*;
use rust_decimal_macros::dec;
use sqlx::PgPool;

use pixgate::config::{OutboundConfig, ProviderEndpoints};
use pixgate::modules::payments::services::PaymentDispatcher;
use pixgate::modules::providers::repositories::ProviderRepository;
use pixgate::modules::providers::services::{ProviderRegistry, RequestStamper};

struct FixedStamp;

impl RequestStamper for FixedStamp {
    fn stamp(&self) -> String {
        "20240101120000".to_string()
    }
}

fn dispatcher(pool: PgPool) -> PaymentDispatcher {
    let endpoints = ProviderEndpoints {
        oasyfy_base: "https://app.oasyfy.com".to_string(),
        pushinpay_base: "https://api.pushinpay.com.br".to_string(),
        ghostpay_base: "https://example.com.br".to_string(),
        status_base: "https://example.com.br".to_string(),
    };

    PaymentDispatcher::new(
        ProviderRepository::new(pool),
        Arc::new(ProviderRegistry::new(&endpoints)),
        &OutboundConfig { timeout_secs: None },
        Arc::new(FixedStamp),
    )
    .unwrap()
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL test database"]
async fn test_create_payment_without_active_config() {
    let pool = create_test_pool().await;
    let user = seed_user(&pool, "inactive").await;
    seed_config(&pool, user.id, "main", "oasyfy").await; // stored but never activated

    let err = dispatcher(pool)
        .create_payment(user.id, dec!(10.00))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "no_active_provider");
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL test database"]
async fn test_create_payment_with_unknown_provider_type() {
    let pool = create_test_pool().await;
    let repo = ProviderRepository::new(pool.clone());

    let user = seed_user(&pool, "legacy").await;
    let config = seed_config(&pool, user.id, "old", "legacypay").await;
    repo.set_active(user.id, config).await.unwrap();

    let err = dispatcher(pool)
        .create_payment(user.id, dec!(10.00))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "unsupported_provider");
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL test database"]
async fn test_check_payment_without_active_config() {
    let pool = create_test_pool().await;
    let user = seed_user(&pool, "checker").await;

    let err = dispatcher(pool)
        .check_payment(user.id, Some("tx-1"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "no_active_provider");
}
