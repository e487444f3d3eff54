//! Groups reducer.

use crossterm::event::{KeyCode, KeyEvent};
use remind_core::models::{GroupId, NewGroup};

use crate::effects::UiEffect;
use crate::events::GroupsUiEvent;
use crate::overlays::{ConfirmState, GroupFormState, Overlay};
use crate::state::{AppState, Screen};

pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let groups = &mut app.groups;
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            groups.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            groups.select_next();
            vec![]
        }
        KeyCode::Enter => match groups.selected_group() {
            Some(group) => {
                let group_id = group.id;
                app.navigate(Screen::Reminders { group_id })
            }
            None => vec![],
        },
        KeyCode::Char('n') => {
            app.overlay = Some(Overlay::GroupForm(GroupFormState::new()));
            vec![]
        }
        KeyCode::Char('d') => {
            if groups.deleting.is_none()
                && let Some(group) = groups.selected_group()
            {
                app.overlay = Some(Overlay::Confirm(ConfirmState::delete_group(group)));
            }
            vec![]
        }
        KeyCode::Char('r') => {
            if groups.loading {
                return vec![];
            }
            groups.loading = true;
            vec![UiEffect::LoadGroups]
        }
        KeyCode::Char('L') => {
            app.reset_to_login();
            vec![UiEffect::ClearSession]
        }
        KeyCode::Char('q') => vec![UiEffect::Quit],
        _ => vec![],
    }
}

/// Submitted from the create-group form.
pub fn submit_create(group: NewGroup) -> Vec<UiEffect> {
    vec![UiEffect::CreateGroup(group)]
}

/// Confirmed in the delete dialog.
pub fn confirm_delete(app: &mut AppState, id: GroupId) -> Vec<UiEffect> {
    app.groups.deleting = Some(id);
    vec![UiEffect::DeleteGroup(id)]
}

pub fn handle_event(app: &mut AppState, event: GroupsUiEvent) -> Vec<UiEffect> {
    if app.screen != Screen::Groups {
        tracing::debug!(?event, "discarding groups result, screen changed");
        return vec![];
    }

    match event {
        GroupsUiEvent::Loaded(result) => {
            app.groups.loading = false;
            match result {
                Ok(groups) => {
                    app.groups.groups = groups;
                    app.groups.clamp_selection();
                }
                Err(err) if err.is_unauthorized() => {}
                Err(err) => app.toast_error(err.user_message("Failed to fetch groups")),
            }
        }
        GroupsUiEvent::Created(result) => match result {
            Ok(group) => {
                if matches!(app.overlay, Some(Overlay::GroupForm(_))) {
                    app.overlay = None;
                }
                // A reload may already have brought the new group in.
                let groups = &mut app.groups.groups;
                app.groups.selected = match groups.iter().position(|g| g.id == group.id) {
                    Some(index) => {
                        groups[index] = group;
                        index
                    }
                    None => {
                        groups.push(group);
                        groups.len() - 1
                    }
                };
                app.toast_success("Group created");
            }
            Err(err) => {
                if let Some(Overlay::GroupForm(form)) = &mut app.overlay {
                    form.submitting = false;
                }
                if !err.is_unauthorized() {
                    app.toast_error(err.user_message("Failed to create group"));
                }
            }
        },
        GroupsUiEvent::Deleted { id, result } => {
            app.groups.deleting = None;
            match result {
                Ok(()) => {
                    app.groups.groups.retain(|g| g.id != id);
                    app.groups.clamp_selection();
                    app.toast_success("Group deleted");
                }
                Err(err) if err.is_unauthorized() => {}
                Err(err) => app.toast_error(err.user_message("Failed to delete group")),
            }
        }
    }
    vec![]
}
