// Integration tests for uniqueness rules on users and configuration
// names. Needs a live PostgreSQL instance; all tests are #[ignore]d.

#[path = "../helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;

use helpers::*;
use pixgate::modules::providers::repositories::ProviderRepository;
use pixgate::modules::users::repositories::UserRepository;

#[tokio::test]
#[ignore = "Requires a PostgreSQL test database"]
async fn test_duplicate_username_rejected_without_breaking_first_token() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());

    let username = unique_name("dup");
    let first = repo.register(&username).await.unwrap();

    let err = repo.register(&username).await.unwrap_err();
    assert_eq!(err.kind(), "duplicate_name");

    // The first user's token still resolves
    let resolved = repo.find_id_by_token(&first.auth_token).await.unwrap();
    assert_eq!(resolved, Some(first.id));
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL test database"]
async fn test_duplicate_config_name_scoped_per_user() {
    let pool = create_test_pool().await;
    let repo = ProviderRepository::new(pool.clone());

    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;

    seed_config(&pool, alice.id, "checkout", "oasyfy").await;

    // Same name, same user: rejected
    let err = repo
        .insert(alice.id, "checkout", "pushinpay", "", "", "tk")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "duplicate_name");

    // Same name, different user: fine
    repo.insert(bob.id, "checkout", "pushinpay", "", "", "tk")
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL test database"]
async fn test_new_configs_start_inactive() {
    let pool = create_test_pool().await;

    let user = seed_user(&pool, "fresh").await;
    seed_config(&pool, user.id, "main", "oasyfy").await;

    assert_eq!(active_count(&pool, user.id).await, 0);

    let listed = ProviderRepository::new(pool.clone())
        .list_for_user(user.id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert!(!listed[0].is_active);
}
