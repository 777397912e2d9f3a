use crate::config::Config;
use crate::context::AppContext;
use crate::error::AllocationError;
use crate::models::{Role, User};

fn test_user() -> User {
    User {
        id: 1,
        username: "2021CS001".to_string(),
        first_name: "Test".to_string(),
        last_name: "Student".to_string(),
        email: Some("test@example.edu".to_string()),
        department: Some("Computer Science".to_string()),
        role: Role::Student,
    }
}

#[test]
fn test_context_without_token_is_logged_out() {
    let context = AppContext::with_config(Config::default()).expect("context should build");

    assert!(!context.is_logged_in());
    assert!(context.user().is_none());

    match context.client() {
        Err(AllocationError::NotLoggedIn) => {}
        _ => panic!("Expected NotLoggedIn"),
    }
    match context.require_user() {
        Err(AllocationError::NotLoggedIn) => {}
        _ => panic!("Expected NotLoggedIn"),
    }
}

#[test]
fn test_context_restores_session_from_config() {
    let config = Config {
        api_url: Some("http://example.edu/api-root".to_string()),
        access_token: Some("token-123".to_string()),
        refresh_token: Some("refresh-456".to_string()),
        user: Some(test_user()),
    };

    let context = AppContext::with_config(config).expect("context should build");

    assert!(context.is_logged_in());
    assert!(context.client().is_ok());
    assert_eq!(context.api_url(), "http://example.edu/api-root");

    let user = context.require_user().expect("user should be restored");
    assert_eq!(user.username, "2021CS001");
    assert_eq!(user.role, Role::Student);
}

#[test]
fn test_context_defaults_api_url() {
    let config = Config {
        access_token: Some("token-123".to_string()),
        ..Config::default()
    };

    let context = AppContext::with_config(config).expect("context should build");
    assert_eq!(context.api_url(), crate::constants::DEFAULT_API_URL);
}
