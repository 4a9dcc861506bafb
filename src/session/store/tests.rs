use std::cell::RefCell;
use std::collections::HashMap;

use super::*;
use crate::models::Role;

thread_local! {
    static MEMORY: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

/// In-memory backend standing in for browser LocalStorage
struct MemoryStorage;

impl StorageBackend for MemoryStorage {
    fn read(key: &str) -> Option<String> {
        MEMORY.with(|m| m.borrow().get(key).cloned())
    }

    fn write(key: &str, value: &str) -> bool {
        MEMORY.with(|m| m.borrow_mut().insert(key.to_string(), value.to_string()));
        true
    }

    fn remove(key: &str) -> bool {
        MEMORY.with(|m| m.borrow_mut().remove(key)).is_some()
    }
}

type TestSession = SessionStore<MemoryStorage>;

fn reset() {
    MEMORY.with(|m| m.borrow_mut().clear());
}

fn sample_user(role: &str) -> User {
    User {
        id: 7,
        name: "Sara".to_string(),
        email: "sara@uni.edu".to_string(),
        role: role.to_string(),
        approved: true,
        department_id: Some(2),
        stage: Some(3),
    }
}

#[test]
fn token_lifecycle() {
    reset();
    assert_eq!(TestSession::token(), None);

    assert!(TestSession::set_token("jwt-abc"));
    assert_eq!(TestSession::token().as_deref(), Some("jwt-abc"));

    // 每个会话最多一个存活令牌：后写覆盖前写
    assert!(TestSession::set_token("jwt-def"));
    assert_eq!(TestSession::token().as_deref(), Some("jwt-def"));

    assert!(TestSession::clear_token());
    assert_eq!(TestSession::token(), None);
}

#[test]
fn user_record_round_trip() {
    reset();
    let user = sample_user("Student");
    assert!(TestSession::set_user(&user));

    let loaded = TestSession::stored_user().expect("user should be stored");
    assert_eq!(loaded, user);
    assert_eq!(loaded.role(), Role::Student);
}

#[test]
fn unparsable_user_record_maps_to_none() {
    reset();
    MemoryStorage::write(super::USER_KEY, "{not json");
    assert_eq!(TestSession::stored_user(), None);
}

#[test]
fn clear_destroys_both_token_and_user() {
    reset();
    TestSession::set_token("t");
    TestSession::set_user(&sample_user("Admin"));

    TestSession::clear();

    assert_eq!(TestSession::token(), None);
    assert_eq!(TestSession::stored_user(), None);
}

#[test]
fn unknown_role_defaults_to_admin() {
    assert_eq!(Role::parse("Student"), Role::Student);
    assert_eq!(Role::parse("student"), Role::Student);
    assert_eq!(Role::parse("Admin"), Role::Admin);
    assert_eq!(Role::parse("Dean"), Role::Admin);
    assert_eq!(Role::parse(""), Role::Admin);
}
