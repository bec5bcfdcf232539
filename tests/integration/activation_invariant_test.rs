// Integration tests for the single-active-configuration invariant.
//
// Every test needs a live PostgreSQL instance and is #[ignore]d; run
// with `cargo test -- --ignored` against a pixgate_test database.

#[path = "../helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;

use helpers::*;
use pixgate::modules::providers::repositories::ProviderRepository;

#[tokio::test]
#[ignore = "Requires a PostgreSQL test database"]
async fn test_activation_switches_the_single_active_config() {
    let pool = create_test_pool().await;
    let repo = ProviderRepository::new(pool.clone());

    let user = seed_user(&pool, "switch").await;
    let first = seed_config(&pool, user.id, "first", "oasyfy").await;
    let second = seed_config(&pool, user.id, "second", "pushinpay").await;

    repo.set_active(user.id, first).await.unwrap();
    assert_eq!(active_count(&pool, user.id).await, 1);
    assert_eq!(active_config_id(&pool, user.id).await, Some(first));

    repo.set_active(user.id, second).await.unwrap();
    assert_eq!(active_count(&pool, user.id).await, 1);
    assert_eq!(active_config_id(&pool, user.id).await, Some(second));
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL test database"]
async fn test_activating_foreign_config_returns_not_found() {
    let pool = create_test_pool().await;
    let repo = ProviderRepository::new(pool.clone());

    let owner = seed_user(&pool, "owner").await;
    let intruder = seed_user(&pool, "intruder").await;
    let owned = seed_config(&pool, owner.id, "main", "ghostpay").await;
    let foreign = seed_config(&pool, intruder.id, "main", "oasyfy").await;

    repo.set_active(intruder.id, foreign).await.unwrap();

    // The intruder targets a config it does not own
    let err = repo.set_active(intruder.id, owned).await.unwrap_err();
    assert_eq!(err.kind(), "not_found");

    // The intruder ends up with nothing active; the owner is untouched
    assert_eq!(active_count(&pool, intruder.id).await, 0);
    assert_eq!(active_count(&pool, owner.id).await, 0);
    assert!(!sqlx::query_scalar::<_, bool>(
        "SELECT is_active FROM provider_configs WHERE id = $1"
    )
    .bind(owned)
    .fetch_one(&pool)
    .await
    .unwrap());
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL test database"]
async fn test_activation_never_touches_other_users() {
    let pool = create_test_pool().await;
    let repo = ProviderRepository::new(pool.clone());

    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;
    let alice_config = seed_config(&pool, alice.id, "main", "oasyfy").await;
    let bob_config = seed_config(&pool, bob.id, "main", "pushinpay").await;

    repo.set_active(bob.id, bob_config).await.unwrap();
    repo.set_active(alice.id, alice_config).await.unwrap();

    // Bob's activation survives Alice's
    assert_eq!(active_config_id(&pool, bob.id).await, Some(bob_config));
    assert_eq!(active_config_id(&pool, alice.id).await, Some(alice_config));
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL test database"]
async fn test_concurrent_activation_leaves_exactly_one_active() {
    let pool = create_test_pool().await;

    let user = seed_user(&pool, "race").await;
    let first = seed_config(&pool, user.id, "first", "oasyfy").await;
    let second = seed_config(&pool, user.id, "second", "ghostpay").await;

    // Hammer both targets concurrently; last committed transaction wins
    let mut handles = Vec::new();
    for round in 0..20 {
        let repo = ProviderRepository::new(pool.clone());
        let target = if round % 2 == 0 { first } else { second };
        let user_id = user.id;
        handles.push(tokio::spawn(async move {
            repo.set_active(user_id, target).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // No dual-active window persists past completion
    assert_eq!(active_count(&pool, user.id).await, 1);
    let winner = active_config_id(&pool, user.id).await.unwrap();
    assert!(winner == first || winner == second);
}
