use remind_core::ApiClient;
use remind_core::models::{GroupId, NewGroup};

use crate::events::{GroupsUiEvent, UiEvent};

pub async fn load_groups(client: ApiClient) -> UiEvent {
    UiEvent::Groups(GroupsUiEvent::Loaded(client.groups().list().await))
}

pub async fn create_group(client: ApiClient, group: NewGroup) -> UiEvent {
    UiEvent::Groups(GroupsUiEvent::Created(client.groups().create(&group).await))
}

pub async fn delete_group(client: ApiClient, id: GroupId) -> UiEvent {
    let result = client.groups().delete(id).await;
    UiEvent::Groups(GroupsUiEvent::Deleted { id, result })
}
