use remind_core::ApiClient;
use remind_core::models::{GroupId, NewReminder, ReminderId, ReminderPatch};

use crate::events::{RemindersUiEvent, UiEvent};

/// Fetches the group and its reminders concurrently; either failure fails
/// the whole load.
pub async fn load_reminders(client: ApiClient, group_id: GroupId) -> UiEvent {
    let groups = client.groups();
    let result = tokio::try_join!(groups.get(group_id), groups.reminders(group_id));
    UiEvent::Reminders(RemindersUiEvent::Loaded { group_id, result })
}

pub async fn create_reminder(client: ApiClient, group_id: GroupId, reminder: NewReminder) -> UiEvent {
    let result = client.groups().create_reminder(group_id, &reminder).await;
    UiEvent::Reminders(RemindersUiEvent::Created { group_id, result })
}

pub async fn toggle_reminder(
    client: ApiClient,
    group_id: GroupId,
    id: ReminderId,
    completed: bool,
) -> UiEvent {
    let result = client
        .reminders()
        .update(id, &ReminderPatch::completed(completed))
        .await;
    UiEvent::Reminders(RemindersUiEvent::Toggled {
        group_id,
        id,
        completed,
        result,
    })
}

pub async fn delete_reminder(client: ApiClient, group_id: GroupId, id: ReminderId) -> UiEvent {
    let result = client.reminders().delete(id).await;
    UiEvent::Reminders(RemindersUiEvent::Deleted {
        group_id,
        id,
        result,
    })
}
