//! Records exchanged with the reminders API.
//!
//! These are plain serde records. The client keeps whatever the server
//! returns and never fills in fields on its own.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Server-assigned user id.
    UserId
);
id_type!(
    /// Server-assigned group id.
    GroupId
);
id_type!(
    /// Server-assigned reminder id.
    ReminderId
);

/// The authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
}

/// Response of `POST /auth/login` and `POST /auth/register`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("token", &"[redacted]")
            .finish()
    }
}

/// Creator summary embedded in groups and reminders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserId>,
    #[serde(default)]
    pub creator: Creator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserId>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub creator: Creator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Reminder {
    /// Whether this reminder should be flagged overdue at `now`.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        is_overdue(self.due_date, self.completed, now)
    }

    /// Description if present and non-blank.
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// A reminder is overdue when its due date is strictly in the past and it
/// has not been completed. No due date means never overdue.
pub fn is_overdue(due_date: Option<DateTime<Utc>>, completed: bool, now: DateTime<Utc>) -> bool {
    match due_date {
        Some(due) => !completed && due < now,
        None => false,
    }
}

// ============================================================================
// Request bodies
// ============================================================================

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewGroup {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReminder {
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
}

/// Partial update for `PUT /reminders/{id}`. Absent fields are left alone
/// by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReminderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl ReminderPatch {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }
}

// ============================================================================
// Due date display and input
// ============================================================================

/// Formats a due date for display in local time, e.g. `Oct 16, 2026`.
pub fn format_due_date(due: DateTime<Utc>) -> String {
    due.with_timezone(&Local).format("%b %-d, %Y").to_string()
}

/// Parses user input of the form `YYYY-MM-DD HH:MM` or `YYYY-MM-DD`
/// (local time). A bare date means midnight.
pub fn parse_due_date(input: &str) -> Option<DateTime<Utc>> {
    let naive = parse_naive_due_date(input.trim())?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

fn parse_naive_due_date(input: &str) -> Option<NaiveDateTime> {
    const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Some(parsed);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use serde_json::json;

    use super::*;

    fn reminder_json() -> serde_json::Value {
        json!({
            "id": 7,
            "title": "Trash",
            "description": "",
            "group_id": 3,
            "created_by": 1,
            "completed": false,
            "due_date": "2026-10-15T08:00:00Z",
            "created_at": "2026-10-14T08:00:00Z",
            "updated_at": "2026-10-14T08:00:00Z",
            "group": { "id": 3, "name": "Chores" },
            "creator": { "id": 1, "username": "alice", "created_at": "2026-10-01T00:00:00Z" }
        })
    }

    #[test]
    fn test_overdue_past_due_not_completed() {
        let now = Utc::now();
        assert!(is_overdue(Some(now - Duration::days(1)), false, now));
    }

    #[test]
    fn test_overdue_past_due_completed() {
        let now = Utc::now();
        assert!(!is_overdue(Some(now - Duration::days(1)), true, now));
    }

    #[test]
    fn test_overdue_without_due_date() {
        let now = Utc::now();
        assert!(!is_overdue(None, false, now));
        assert!(!is_overdue(None, true, now));
    }

    #[test]
    fn test_overdue_is_strict() {
        let now = Utc::now();
        assert!(!is_overdue(Some(now), false, now));
        assert!(!is_overdue(Some(now + Duration::minutes(5)), false, now));
    }

    #[test]
    fn test_reminder_tolerates_extra_fields() {
        let reminder: Reminder = serde_json::from_value(reminder_json()).unwrap();
        assert_eq!(reminder.id, ReminderId(7));
        assert_eq!(reminder.group_id, Some(GroupId(3)));
        assert_eq!(reminder.creator.username, "alice");
        assert_eq!(reminder.description_text(), None);
    }

    #[test]
    fn test_reminder_null_due_date() {
        let mut value = reminder_json();
        value["due_date"] = serde_json::Value::Null;
        let reminder: Reminder = serde_json::from_value(value).unwrap();
        assert_eq!(reminder.due_date, None);
        assert!(!reminder.is_overdue(Utc::now()));
    }

    #[test]
    fn test_patch_omits_absent_fields() {
        let body = serde_json::to_value(ReminderPatch::completed(true)).unwrap();
        assert_eq!(body, json!({ "completed": true }));
    }

    #[test]
    fn test_new_reminder_sends_null_due_date() {
        let body = serde_json::to_value(NewReminder {
            title: "Trash".into(),
            description: String::new(),
            due_date: None,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({ "title": "Trash", "description": "", "due_date": null })
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = Credentials::new("alice", "hunter2");
        assert!(!format!("{credentials:?}").contains("hunter2"));

        let session = Session {
            user: User {
                id: UserId(1),
                username: "alice".into(),
            },
            token: "tok-secret".into(),
        };
        let debug = format!("{session:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("tok-secret"));
    }

    #[test]
    fn test_parse_due_date_formats() {
        let with_time = parse_due_date("2026-10-16 09:30").unwrap();
        let date_only = parse_due_date("2026-10-16").unwrap();
        assert_eq!(with_time - date_only, Duration::minutes(9 * 60 + 30));
        assert!(parse_due_date("tomorrow").is_none());
        assert!(parse_due_date("").is_none());
    }

    #[test]
    fn test_format_due_date_round_trips_local_day() {
        let due = parse_due_date("2026-10-16 12:00").unwrap();
        assert_eq!(format_due_date(due), "Oct 16, 2026");
    }
}
