//! Unit tests for the demo login.

use careerbuddy::clock::ManualClock;
use careerbuddy::services::auth_service::{
    AuthService, AuthServiceTrait, DEMO_USERNAME, USER_STORAGE_KEY,
};
use careerbuddy::storage::{MemoryStore, SessionStore};
use careerbuddy::types::errors::AuthError;

const PASSWORD: &str = "careerbuddy2024";

fn setup() -> (AuthService, MemoryStore) {
    let store = MemoryStore::new();
    let auth = AuthService::with_clock(store.clone(), ManualClock::new(42_000));
    (auth, store)
}

#[test]
fn test_login_with_demo_credentials() {
    let (mut auth, store) = setup();
    let user = auth.login(DEMO_USERNAME, PASSWORD).unwrap();

    assert_eq!(user.username, "demo");
    assert_eq!(user.signed_in_at, 42_000);
    assert!(auth.is_authenticated());
    assert_eq!(auth.current_user(), Some(&user));
    assert!(store.get(USER_STORAGE_KEY).unwrap().is_some());
}

#[test]
fn test_username_is_case_insensitive_and_trimmed() {
    let (mut auth, _store) = setup();
    assert!(auth.login("  Demo ", PASSWORD).is_ok());
}

#[test]
fn test_wrong_password_is_rejected() {
    let (mut auth, store) = setup();
    let err = auth.login(DEMO_USERNAME, "hunter2").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert!(!auth.is_authenticated());
    assert!(store.is_empty());
}

#[test]
fn test_wrong_username_is_rejected() {
    let (mut auth, _store) = setup();
    let err = auth.login("admin", PASSWORD).unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[test]
fn test_empty_fields_are_reported_as_missing() {
    let (mut auth, _store) = setup();
    assert!(matches!(auth.login("", PASSWORD), Err(AuthError::MissingCredentials)));
    assert!(matches!(auth.login("demo", ""), Err(AuthError::MissingCredentials)));
    assert!(matches!(auth.login("   ", "x"), Err(AuthError::MissingCredentials)));
}

#[test]
fn test_logout_clears_user_and_store() {
    let (mut auth, store) = setup();
    auth.login(DEMO_USERNAME, PASSWORD).unwrap();
    auth.logout();

    assert!(!auth.is_authenticated());
    assert_eq!(auth.current_user(), None);
    assert_eq!(store.get(USER_STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_restore_signs_back_in_from_store() {
    let (mut auth, store) = setup();
    let user = auth.login(DEMO_USERNAME, PASSWORD).unwrap();

    let mut reloaded = AuthService::new(store.clone());
    assert_eq!(reloaded.restore(), Some(user));
    assert!(reloaded.is_authenticated());
}

#[test]
fn test_restore_with_corrupt_data_stays_signed_out() {
    let store = MemoryStore::new();
    store.set(USER_STORAGE_KEY, "garbage").unwrap();

    let mut auth = AuthService::new(store);
    assert_eq!(auth.restore(), None);
    assert!(!auth.is_authenticated());
}

#[test]
fn test_caller_owned_zeroizing_password_is_only_borrowed() {
    use zeroize::Zeroizing;

    let (mut auth, store) = setup();
    let password = Zeroizing::new(String::from(PASSWORD));
    auth.login(DEMO_USERNAME, &password).unwrap();

    assert_eq!(password.as_str(), PASSWORD);
    let stored = store.get(USER_STORAGE_KEY).unwrap().unwrap();
    assert!(!stored.contains(PASSWORD));
}
