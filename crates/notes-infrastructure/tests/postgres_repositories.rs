//! Repository behaviour against a live PostgreSQL instance.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -p notes-infrastructure -- --ignored`.

use chrono::{Duration, Utc};
use sqlx::PgPool;

use notes_core::domain::{NewMessage, Session, User};
use notes_core::repositories::{MessageRepository, SessionRepository, UserRepository};
use notes_infrastructure::{PgMessageRepository, PgSessionRepository, PgUserRepository};

async fn seed_user(pool: &PgPool, username: &str) -> User {
    let hash = notes_security::PasswordService::hash_with_cost("pw", 4).unwrap();
    PgUserRepository::new(pool.clone())
        .create(&User::new(username.to_string(), hash))
        .await
        .unwrap()
}

#[ignore = "requires DATABASE_URL"]
#[sqlx::test(migrations = "./migrations")]
async fn username_lookup_is_exact(pool: PgPool) {
    let users = PgUserRepository::new(pool.clone());
    let alice = seed_user(&pool, "Alice").await;

    assert_eq!(users.find_by_username("Alice").await.unwrap().unwrap().id, alice.id);
    assert!(users.find_by_username("alice").await.unwrap().is_none());
    assert!(users.find_by_username("Alice ").await.unwrap().is_none());
}

#[ignore = "requires DATABASE_URL"]
#[sqlx::test(migrations = "./migrations")]
async fn expired_sessions_are_not_found(pool: PgPool) {
    let user = seed_user(&pool, "alice").await;
    let sessions = PgSessionRepository::new(pool.clone());

    let live = Session::new("a".repeat(64), user.id, Utc::now(), Duration::hours(1));
    let stale = Session::new("b".repeat(64), user.id, Utc::now() - Duration::hours(2), Duration::hours(1));
    sessions.insert(&live).await.unwrap();
    sessions.insert(&stale).await.unwrap();

    assert_eq!(sessions.find_active(&live.token).await.unwrap().unwrap().user_id, user.id);
    assert!(sessions.find_active(&stale.token).await.unwrap().is_none());
    assert!(sessions.find_active("unknown").await.unwrap().is_none());

    sessions.delete(&live.token).await.unwrap();
    sessions.delete(&live.token).await.unwrap();
    assert!(sessions.find_active(&live.token).await.unwrap().is_none());
}

#[ignore = "requires DATABASE_URL"]
#[sqlx::test(migrations = "./migrations")]
async fn updates_only_match_the_owner(pool: PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;
    let messages = PgMessageRepository::new(pool.clone());

    let issued_at = Utc::now() - Duration::seconds(1);
    let note = messages
        .insert(&NewMessage { user_id: bob.id, body: "bob's note".into() })
        .await
        .unwrap();
    assert!(note.created_at >= issued_at);

    assert!(messages.update_if_owner(note.id, &alice.id, "hijack").await.unwrap().is_none());
    assert!(messages.update_if_owner(note.id + 1000, &alice.id, "x").await.unwrap().is_none());

    let updated = messages.update_if_owner(note.id, &bob.id, "edited").await.unwrap().unwrap();
    assert_eq!(updated.body, "edited");
    assert_eq!(updated.created_at, note.created_at);

    assert!(messages.list_by_owner(&alice.id).await.unwrap().is_empty());
}

#[ignore = "requires DATABASE_URL"]
#[sqlx::test(migrations = "./migrations")]
async fn list_is_oldest_first(pool: PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let messages = PgMessageRepository::new(pool.clone());

    for body in ["one", "two", "three"] {
        messages
            .insert(&NewMessage { user_id: alice.id, body: body.into() })
            .await
            .unwrap();
    }

    let bodies: Vec<String> = messages
        .list_by_owner(&alice.id)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.body)
        .collect();
    assert_eq!(bodies, ["one", "two", "three"]);
}
