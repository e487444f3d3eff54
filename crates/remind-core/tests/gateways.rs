//! One test per endpoint: method, path, request body and decoded response.


use fixtures::{
    TOKEN, alice, anonymous_client, can_bind_localhost, group_json, logged_in_client,
    reminder_json, session_json,
};
use remind_core::models::{Credentials, GroupId, NewGroup, NewReminder, ReminderId, ReminderPatch};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn start() -> Option<MockServer> {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return None;
    }
    Some(MockServer::start().await)
}

#[tokio::test]
async fn test_register() {
    let Some(server) = start().await else { return };
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({ "username": "alice", "password": "pw" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(session_json(TOKEN)))
        .expect(1)
        .mount(&server)
        .await;

    let (client, session) = anonymous_client(&server);
    let result = client
        .auth()
        .register(&Credentials::new("alice", "pw"))
        .await
        .unwrap();

    assert_eq!(result.user, alice());
    assert_eq!(result.token, TOKEN);
    // Gateways never touch the session store.
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_login() {
    let Some(server) = start().await else { return };
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "username": "alice", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_json(TOKEN)))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = anonymous_client(&server);
    let result = client
        .auth()
        .login(&Credentials::new("alice", "pw"))
        .await
        .unwrap();

    assert_eq!(result.user.username, "alice");
}

#[tokio::test]
async fn test_register_conflict_message() {
    let Some(server) = start().await else { return };
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "error": "Username already exists" })),
        )
        .mount(&server)
        .await;

    let (client, _session) = anonymous_client(&server);
    let err = client
        .auth()
        .register(&Credentials::new("alice", "pw"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert_eq!(err.user_message("Registration failed"), "Username already exists");
}

#[tokio::test]
async fn test_list_groups() {
    let Some(server) = start().await else { return };
    Mock::given(method("GET"))
        .and(path("/groups"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([group_json(1, "Chores"), group_json(2, "Work")])),
        )
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let groups = client.groups().list().await.unwrap();

    let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Chores", "Work"]);
    assert_eq!(groups[0].creator.username, "alice");
}

#[tokio::test]
async fn test_create_group() {
    let Some(server) = start().await else { return };
    Mock::given(method("POST"))
        .and(path("/groups"))
        .and(body_json(json!({ "name": "Chores" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(group_json(3, "Chores")))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let group = client
        .groups()
        .create(&NewGroup {
            name: "Chores".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(group.id, GroupId(3));
}

#[tokio::test]
async fn test_get_and_delete_group() {
    let Some(server) = start().await else { return };
    Mock::given(method("GET"))
        .and(path("/groups/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(group_json(3, "Chores")))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/groups/3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Group deleted" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let group = client.groups().get(GroupId(3)).await.unwrap();
    assert_eq!(group.name, "Chores");

    client.groups().delete(GroupId(3)).await.unwrap();
}

#[tokio::test]
async fn test_group_reminders() {
    let Some(server) = start().await else { return };
    Mock::given(method("GET"))
        .and(path("/groups/3/reminders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            reminder_json(8, 3, "Dishes", false),
            reminder_json(7, 3, "Trash", true),
        ])))
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let reminders = client.groups().reminders(GroupId(3)).await.unwrap();

    let ids: Vec<_> = reminders.iter().map(|r| r.id).collect();
    assert_eq!(ids, [ReminderId(8), ReminderId(7)]);
    assert!(reminders[1].completed);
}

#[tokio::test]
async fn test_create_reminder() {
    let Some(server) = start().await else { return };
    Mock::given(method("POST"))
        .and(path("/groups/3/reminders"))
        .and(body_json(json!({ "title": "Trash", "description": "", "due_date": null })))
        .respond_with(ResponseTemplate::new(201).set_body_json(reminder_json(7, 3, "Trash", false)))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let reminder = client
        .groups()
        .create_reminder(
            GroupId(3),
            &NewReminder {
                title: "Trash".to_string(),
                description: String::new(),
                due_date: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(reminder.id, ReminderId(7));
    assert!(!reminder.completed);
}

#[tokio::test]
async fn test_update_reminder_sends_only_patch_fields() {
    let Some(server) = start().await else { return };
    Mock::given(method("PUT"))
        .and(path("/reminders/7"))
        .and(body_json(json!({ "completed": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reminder_json(7, 3, "Trash", true)))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    let reminder = client
        .reminders()
        .update(ReminderId(7), &ReminderPatch::completed(true))
        .await
        .unwrap();

    assert!(reminder.completed);
}

#[tokio::test]
async fn test_delete_reminder() {
    let Some(server) = start().await else { return };
    Mock::given(method("DELETE"))
        .and(path("/reminders/7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Reminder deleted" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _session) = logged_in_client(&server);
    client.reminders().delete(ReminderId(7)).await.unwrap();
}
