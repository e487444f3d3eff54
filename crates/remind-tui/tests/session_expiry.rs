//! A rejected token sends the user back to login from any screen.


use crossterm::event::KeyCode;
use fixtures::{Harness, TOKEN, can_bind_localhost, error_json, group_json};
use remind_core::session::{SessionStorage, TOKEN_KEY, USER_KEY};
use remind_tui::state::{Screen, ToastKind};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_rehydrated_session_starts_on_groups() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/groups"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([group_json(3, "Chores")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut h = Harness::logged_in(&server);
    assert_eq!(h.app.screen, Screen::Groups);
    h.start();
    h.settle().await;

    assert_eq!(h.app.groups.groups.len(), 1);
    assert_eq!(h.session.token().as_deref(), Some(TOKEN));
}

#[tokio::test]
async fn test_expired_token_on_groups_load() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/groups"))
        .respond_with(ResponseTemplate::new(401).set_body_json(error_json("Invalid token")))
        .mount(&server)
        .await;

    let mut h = Harness::logged_in(&server);
    h.start();
    h.settle().await;

    assert_eq!(h.app.screen, Screen::Login);
    assert!(h.app.user.is_none());
    assert!(!h.session.is_authenticated());
    assert_eq!(h.storage.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(h.storage.get(USER_KEY).unwrap(), None);

    let toast = h.app.toast.as_ref().unwrap();
    assert_eq!(toast.kind, ToastKind::Info);
    assert!(toast.message.contains("session has expired"));
}

#[tokio::test]
async fn test_expired_token_on_reminders_screen() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/groups"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([group_json(3, "Chores")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/groups/3"))
        .respond_with(ResponseTemplate::new(401).set_body_json(error_json("Invalid token")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/groups/3/reminders"))
        .respond_with(ResponseTemplate::new(401).set_body_json(error_json("Invalid token")))
        .mount(&server)
        .await;

    let mut h = Harness::logged_in(&server);
    h.start();
    h.settle().await;
    h.press(KeyCode::Enter);
    h.settle().await;

    assert_eq!(h.app.screen, Screen::Login);
    assert!(!h.session.is_authenticated());
    assert!(h.app.groups.groups.is_empty());
    assert_eq!(h.app.toast.as_ref().unwrap().kind, ToastKind::Info);
}

#[tokio::test]
async fn test_wrong_password_stays_on_login() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(error_json("Invalid credentials")))
        .mount(&server)
        .await;

    let mut h = Harness::new(&server);
    h.start();
    h.type_text("alice");
    h.press(KeyCode::Tab);
    h.type_text("nope");
    h.press(KeyCode::Enter);
    h.settle().await;

    assert_eq!(h.app.screen, Screen::Login);
    assert!(!h.app.login.submitting);
    assert_eq!(h.app.login.error.as_deref(), Some("Invalid credentials"));
    assert!(h.app.toast.is_none());
}

#[tokio::test]
async fn test_logout_clears_stored_session() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let mut h = Harness::logged_in(&server);
    h.start();
    h.settle().await;
    h.press(KeyCode::Char('L'));

    assert_eq!(h.app.screen, Screen::Login);
    assert!(!h.session.is_authenticated());
    assert_eq!(h.storage.get(TOKEN_KEY).unwrap(), None);
}
