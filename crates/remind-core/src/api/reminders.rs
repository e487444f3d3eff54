use crate::http::{ApiClient, ApiResult};
use crate::models::{Reminder, ReminderId, ReminderPatch};

/// `/reminders/{id}` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct RemindersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> RemindersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `PUT /reminders/{id}`; returns the server's updated record.
    pub async fn update(&self, id: ReminderId, patch: &ReminderPatch) -> ApiResult<Reminder> {
        self.client.put_json(&format!("/reminders/{id}"), patch).await
    }

    pub async fn delete(&self, id: ReminderId) -> ApiResult<()> {
        self.client.delete(&format!("/reminders/{id}")).await
    }
}
