use crate::http::{ApiClient, ApiResult};
use crate::models::{Group, GroupId, NewGroup, NewReminder, Reminder};

/// `/groups` endpoints, including the reminders nested under a group.
#[derive(Debug, Clone, Copy)]
pub struct GroupsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> GroupsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Group>> {
        self.client.get_json("/groups").await
    }

    pub async fn create(&self, group: &NewGroup) -> ApiResult<Group> {
        self.client.post_json("/groups", group).await
    }

    pub async fn get(&self, id: GroupId) -> ApiResult<Group> {
        self.client.get_json(&format!("/groups/{id}")).await
    }

    pub async fn delete(&self, id: GroupId) -> ApiResult<()> {
        self.client.delete(&format!("/groups/{id}")).await
    }

    /// Reminders of a group, newest first as ordered by the server.
    pub async fn reminders(&self, id: GroupId) -> ApiResult<Vec<Reminder>> {
        self.client.get_json(&format!("/groups/{id}/reminders")).await
    }

    pub async fn create_reminder(&self, id: GroupId, reminder: &NewReminder) -> ApiResult<Reminder> {
        self.client
            .post_json(&format!("/groups/{id}/reminders"), reminder)
            .await
    }
}
